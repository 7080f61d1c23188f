//! Blocking key reader over crossterm events.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::trace;

use crate::core::InputSource;
use crate::map::handle_key_event;
use crate::types::Command;

/// Reads one key press per call.
///
/// Key releases and auto-repeats are skipped so that one physical press is one
/// tick. A terminal resize yields an idle tick, which redraws the frame.
#[derive(Debug, Default)]
pub struct KeyReader;

impl KeyReader {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyReader {
    fn next_command(&mut self) -> io::Result<Command> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let command = handle_key_event(key);
                    trace!(?key, command = command.as_str(), "key");
                    return Ok(command);
                }
                Event::Resize(..) => return Ok(Command::Idle),
                _ => {}
            }
        }
    }
}
