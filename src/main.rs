//! Terminal runner (default binary).
//!
//! Loads the map directory, resolves the start map, and hands the terminal to
//! the engine until the player quits. Logs go to a file because the screen
//! belongs to the game while it runs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tilewalk::core::catalog::error_chain;
use tilewalk::core::{Engine, EngineConfig, MapCatalog};
use tilewalk::input::KeyReader;
use tilewalk::term::TerminalRenderer;
use tilewalk::types::{MapCoordinate, PLAYER_SPRITE, START_COORDINATE, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "tilewalk", version, about = "Walk around tile maps in the terminal")]
struct Args {
    /// Directory of .json map files, relative to the working directory.
    #[arg(long, default_value = "maps")]
    maps: PathBuf,

    /// Pause between ticks, in milliseconds.
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u64,

    /// Glyph drawn for the player.
    #[arg(long, default_value_t = PLAYER_SPRITE)]
    sprite: char,

    /// World column of the start map.
    #[arg(long, default_value_t = START_COORDINATE.column, allow_negative_numbers = true)]
    column: i32,

    /// World row of the start map.
    #[arg(long, default_value_t = START_COORDINATE.row, allow_negative_numbers = true)]
    row: i32,

    /// Directory for the log file.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_logging(&args.log_dir)?;

    let load = MapCatalog::load_dir(&args.maps)
        .with_context(|| format!("cannot load maps from {}", args.maps.display()))?;
    for err in &load.errors {
        eprintln!("warning: {}", error_chain(err));
    }
    if load.catalog.is_empty() {
        bail!("no usable maps in {}", args.maps.display());
    }

    let config = EngineConfig::default()
        .with_tick(Duration::from_millis(args.tick_ms))
        .with_start_coordinate(MapCoordinate::new(args.column, args.row))
        .with_sprite(args.sprite);
    let mut engine = Engine::new(load.catalog, config).context("cannot start the game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = engine.run(&mut KeyReader::new(), &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(err) = &result {
        tracing::error!(error = %error_chain(err), "game aborted");
    }
    Ok(result?)
}

/// Log to `<log_dir>/tilewalk.log`, filtered by `RUST_LOG` (default `info`).
///
/// The returned guard flushes the writer on drop.
fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "tilewalk.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}
