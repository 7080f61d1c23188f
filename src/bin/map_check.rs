//! Map directory checker.
//!
//! Loads a map directory the same way the game does and prints what it found.
//! Exits non-zero if any file failed to load or nothing loaded at all.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use tilewalk::core::catalog::error_chain;
use tilewalk::core::{CatalogLoad, Grid, MapCatalog};

#[derive(Debug, Parser)]
#[command(name = "map-check", version, about = "Validate a directory of tile maps")]
struct Args {
    /// Directory of .json map files.
    #[arg(default_value = "maps")]
    dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let load = MapCatalog::load_dir(&args.dir)
        .with_context(|| format!("cannot load maps from {}", args.dir.display()))?;

    for grid in load.catalog.iter() {
        println!("{}", describe(grid));
    }
    for err in &load.errors {
        println!("error: {}", error_chain(err));
    }

    check(&load, &args.dir)
}

/// Pass only when at least one map loaded and no file failed.
fn check(load: &CatalogLoad, dir: &Path) -> Result<()> {
    if load.catalog.is_empty() {
        bail!("no usable maps in {}", dir.display());
    }
    if !load.errors.is_empty() {
        bail!("{} map file(s) failed to load", load.errors.len());
    }
    Ok(())
}

fn describe(grid: &Grid) -> String {
    let start = grid
        .start()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "default".to_string());
    format!(
        "ok: {} at {} ({}x{}, start {})",
        grid.name(),
        grid.world(),
        grid.row_count(),
        grid.column_count(),
        start
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn write_map(dir: &TempDir, name: &str, column: i32) {
        let map = json!({ "column": column, "row": 1, "data": [["-", "-"], ["-", "#"]] });
        fs::write(dir.path().join(name), map.to_string()).unwrap();
    }

    fn check_dir(dir: &TempDir) -> Result<()> {
        let load = MapCatalog::load_dir(dir.path())?;
        check(&load, dir.path())
    }

    #[test]
    fn test_clean_directory_passes() {
        let dir = TempDir::new().unwrap();
        write_map(&dir, "a.json", 1);
        write_map(&dir, "b.json", 2);
        assert!(check_dir(&dir).is_ok());
    }

    #[test]
    fn test_one_bad_file_fails() {
        let dir = TempDir::new().unwrap();
        write_map(&dir, "a.json", 1);
        fs::write(dir.path().join("b.json"), "{ not json").unwrap();
        let err = check_dir(&dir).unwrap_err();
        assert_eq!(err.to_string(), "1 map file(s) failed to load");
    }

    #[test]
    fn test_nothing_usable_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        let err = check_dir(&dir).unwrap_err();
        assert!(err.to_string().starts_with("no usable maps in"));
    }

    #[test]
    fn test_shipped_maps_pass() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("maps");
        let load = MapCatalog::load_dir(&dir).unwrap();
        assert!(check(&load, &dir).is_ok());
    }
}
