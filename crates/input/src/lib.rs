//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and provides a
//! blocking [`KeyReader`] that feeds the engine one command per tick.

pub mod map;
pub mod reader;

pub use tilewalk_core as core;
pub use tilewalk_types as types;

pub use map::{handle_key_event, should_quit};
pub use reader::KeyReader;
