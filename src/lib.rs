//! tilewalk (workspace facade crate).
//!
//! Re-exports the dedicated crates under `crates/` as
//! `tilewalk::{core,input,term,types}`.

pub use tilewalk_core as core;
pub use tilewalk_input as input;
pub use tilewalk_term as term;
pub use tilewalk_types as types;
