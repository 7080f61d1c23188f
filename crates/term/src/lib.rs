//! Terminal output module.
//!
//! Owns the terminal while a game runs (raw mode, alternate screen, hidden
//! cursor) and presents each frame the engine renders.

pub mod renderer;

pub use tilewalk_core as core;
pub use tilewalk_types as types;

pub use renderer::{encode_frame_into, TerminalRenderer};
