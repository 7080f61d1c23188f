//! Core game logic module - maps, collision, player, and the tick loop
//!
//! Everything here is deterministic and has no terminal dependency. I/O with
//! the outside world goes through two small traits, [`InputSource`] and
//! [`Screen`], so the loop can be driven by a real terminal or by a script.
//!
//! # Module Structure
//!
//! - [`grid`]: validated character matrix of one map, plus the [`TileIndex`] collision view
//! - [`catalog`]: loads a directory of JSON maps and resolves the active one by world coordinate
//! - [`player`]: the avatar's position, facing, health, and sprite
//! - [`render`]: grid + player to newline-delimited text
//! - [`engine`]: run state, command application, and the tick loop
//! - [`config`]: engine tunables
//! - [`error`]: error taxonomy
//!
//! # Rules
//!
//! - A cell is solid unless its glyph is the passable marker (`-` by default).
//! - A move turns the player even when the target cell rejects it.
//! - A move commits only if the target is inside the grid and not solid.
//! - `q` ends the loop; any unknown key is an idle tick.
//!
//! # Example
//!
//! ```
//! use tilewalk_core::{Engine, EngineConfig, Grid, MapCatalog, StepOutcome};
//! use tilewalk_core::types::{Command, Direction, MapCoordinate, Position};
//!
//! let grid = Grid::from_lines(
//!     "demo",
//!     MapCoordinate::new(1, 1),
//!     &["----", "-##-", "----"],
//!     Some(Position::new(0, 0)),
//! )
//! .unwrap();
//! let mut engine = Engine::new(MapCatalog::new(vec![grid]), EngineConfig::default()).unwrap();
//!
//! engine.apply(Command::Move(Direction::Down)).unwrap();
//! assert_eq!(engine.player().position(), Position::new(1, 0));
//!
//! let out = engine.apply(Command::Move(Direction::Right)).unwrap();
//! assert!(matches!(out, StepOutcome::Blocked { .. }));
//! assert_eq!(engine.player().direction(), Direction::Right);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod player;
pub mod render;

pub use tilewalk_types as types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogLoad, MapCatalog};
pub use config::EngineConfig;
pub use engine::{Engine, InputSource, RunState, Screen, StepOutcome};
pub use error::{EngineError, GridError, LoadError, ResolutionError, ValidationError};
pub use grid::{Grid, Tile, TileIndex};
pub use player::Player;
pub use render::render;
