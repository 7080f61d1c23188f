//! Map catalog - loads every map in a directory and resolves the active one.
//!
//! Map files are JSON records:
//!
//! ```json
//! {
//!   "column": 1,
//!   "row": 1,
//!   "data": [["-", "-", "#"], ["-", "#", "-"]],
//!   "start_position": { "y": 0, "x": 1 }
//! }
//! ```
//!
//! `start_position` is optional. Only regular files with a `.json` extension
//! are considered; they are loaded in file-name order. A file that fails to
//! load is skipped and reported, it never aborts the whole directory.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{LoadError, ResolutionError};
use crate::grid::Grid;
use crate::types::{MapCoordinate, Position};

/// File extension of map files.
pub const MAP_EXTENSION: &str = "json";

#[derive(Debug, Deserialize)]
struct MapFile {
    column: i32,
    row: i32,
    data: Vec<Vec<String>>,
    #[serde(default)]
    start_position: Option<StartPosition>,
}

#[derive(Debug, Deserialize)]
struct StartPosition {
    y: u32,
    x: u32,
}

/// Result of loading a directory: the maps that loaded plus one error per
/// file that did not.
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: MapCatalog,
    pub errors: Vec<LoadError>,
}

/// All loaded maps, in load order.
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    maps: Vec<Grid>,
}

impl MapCatalog {
    pub fn new(maps: Vec<Grid>) -> Self {
        Self { maps }
    }

    /// Load every `.json` map in `dir`.
    ///
    /// Fails outright only when the directory is missing, unreadable, or has
    /// no eligible files. Per-file failures land in [`CatalogLoad::errors`].
    pub fn load_dir(dir: &Path) -> Result<CatalogLoad, LoadError> {
        if !dir.is_dir() {
            return Err(LoadError::DirectoryMissing {
                path: dir.to_path_buf(),
            });
        }

        let entries = fs::read_dir(dir).map_err(|source| LoadError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if is_map_file(&path) {
                files.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-map entry");
            }
        }

        if files.is_empty() {
            return Err(LoadError::NoMapFiles {
                path: dir.to_path_buf(),
            });
        }
        files.sort();

        let mut maps = Vec::with_capacity(files.len());
        let mut errors = Vec::new();
        for path in files {
            match load_file(&path) {
                Ok(grid) => {
                    debug!(
                        map = grid.name(),
                        world = %grid.world(),
                        rows = grid.row_count(),
                        columns = grid.column_count(),
                        "loaded map"
                    );
                    maps.push(grid);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %error_chain(&err), "skipping map file");
                    errors.push(err);
                }
            }
        }

        info!(
            dir = %dir.display(),
            loaded = maps.len(),
            failed = errors.len(),
            "map catalog loaded"
        );

        Ok(CatalogLoad {
            catalog: Self::new(maps),
            errors,
        })
    }

    /// First map registered at `coordinate`.
    ///
    /// Catalogs may hold several maps with the same coordinate; the one loaded
    /// first wins.
    pub fn resolve(&self, coordinate: MapCoordinate) -> Result<&Grid, ResolutionError> {
        self.maps
            .iter()
            .find(|m| m.world() == coordinate)
            .ok_or(ResolutionError { coordinate })
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grid> {
        self.maps.iter()
    }
}

/// Parse one map file into a grid named after the file stem.
pub fn load_file(path: &Path) -> Result<Grid, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(path, &content)
}

fn parse_map(path: &Path, content: &str) -> Result<Grid, LoadError> {
    let file: MapFile = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let start = file
        .start_position
        .map(|s| Position::new(s.y as i32, s.x as i32));

    Grid::from_cells(
        name,
        MapCoordinate::new(file.column, file.row),
        file.data,
        start,
    )
    .map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

fn is_map_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == MAP_EXTENSION)
}

/// Render an error and its sources on one line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(s) = source {
        out.push_str(": ");
        out.push_str(&s.to_string());
        source = s.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::GridError;

    fn path() -> PathBuf {
        PathBuf::from("maps/test.json")
    }

    #[test]
    fn parses_full_record() {
        let json = r##"{"column":2,"row":3,"data":[["-","#"],["-","-"]],"start_position":{"y":1,"x":0}}"##;
        let grid = parse_map(&path(), json).unwrap();
        assert_eq!(grid.name(), "test");
        assert_eq!(grid.world(), MapCoordinate::new(2, 3));
        assert_eq!(grid.start(), Some(Position::new(1, 0)));
        assert_eq!(grid.rows(), &[vec!['-', '#'], vec!['-', '-']]);
    }

    #[test]
    fn start_position_is_optional() {
        let json = r#"{"column":1,"row":1,"data":[["-"]]}"#;
        let grid = parse_map(&path(), json).unwrap();
        assert_eq!(grid.start(), None);
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"{"column":1,"data":[["-"]]}"#;
        let err = parse_map(&path(), json).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn negative_start_is_a_parse_error() {
        let json = r#"{"column":1,"row":1,"data":[["-"]],"start_position":{"y":-1,"x":0}}"#;
        let err = parse_map(&path(), json).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn ragged_data_is_invalid() {
        let json = r#"{"column":1,"row":1,"data":[["-","-"],["-"]]}"#;
        let err = parse_map(&path(), json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                source: GridError::Ragged { .. },
                ..
            }
        ));
    }

    #[test]
    fn resolve_prefers_first_match() {
        let a = Grid::from_lines("a", MapCoordinate::new(1, 1), &["-"], None).unwrap();
        let b = Grid::from_lines("b", MapCoordinate::new(1, 1), &["#"], None).unwrap();
        let catalog = MapCatalog::new(vec![a, b]);
        assert_eq!(catalog.resolve(MapCoordinate::new(1, 1)).unwrap().name(), "a");
        assert_eq!(
            catalog.resolve(MapCoordinate::new(0, 0)).unwrap_err(),
            ResolutionError {
                coordinate: MapCoordinate::new(0, 0)
            }
        );
    }

    #[test]
    fn error_chain_includes_sources() {
        let err = LoadError::Invalid {
            path: path(),
            source: GridError::NoRows,
        };
        assert_eq!(
            error_chain(&err),
            "map file maps/test.json is invalid: grid has no rows"
        );
    }
}
