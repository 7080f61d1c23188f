//! Error taxonomy for the core.
//!
//! - [`GridError`]: a map's character matrix is malformed.
//! - [`LoadError`]: the map directory or one map file could not be loaded.
//! - [`ResolutionError`]: no map exists at the requested world coordinate.
//! - [`ValidationError`]: a raw value is outside a closed set.
//! - [`EngineError`]: anything that stops the run loop.
//!
//! Load errors for individual files are collected rather than returned early;
//! see [`crate::catalog::MapCatalog::load_dir`].

use std::io;
use std::path::PathBuf;

use crate::types::{MapCoordinate, Position};

/// A map's grid failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    NoRows,

    #[error("row {row} has no columns")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell at row {row}, column {column} must be exactly one character, got {value:?}")]
    BadGlyph {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("start position {start} lies outside the {rows}x{columns} grid")]
    StartOutOfBounds {
        start: Position,
        rows: usize,
        columns: usize,
    },
}

/// Loading the map directory, or one file in it, failed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("map directory {} does not exist", path.display())]
    DirectoryMissing { path: PathBuf },

    #[error("map directory {} could not be read", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map directory {} contains no .json map files", path.display())]
    NoMapFiles { path: PathBuf },

    #[error("failed to read map file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse map file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("map file {} is invalid", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: GridError,
    },
}

impl LoadError {
    /// The file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::DirectoryMissing { path }
            | LoadError::DirectoryUnreadable { path, .. }
            | LoadError::NoMapFiles { path }
            | LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Invalid { path, .. } => path,
        }
    }

    /// True for errors that concern a single map file rather than the directory.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            LoadError::Read { .. } | LoadError::Parse { .. } | LoadError::Invalid { .. }
        )
    }
}

/// No map is registered at a world coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no map at {coordinate}")]
pub struct ResolutionError {
    pub coordinate: MapCoordinate,
}

/// A raw value is outside its closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid direction index {0}, expected 0..=3")]
    InvalidDirection(u8),
}

/// Fatal conditions of the run loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("failed to read input")]
    Input(#[source] io::Error),

    #[error("failed to write to the display")]
    Display(#[source] io::Error),
}
