//! Key mapping from terminal events to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map a key press to a command.
///
/// Character keys go through [`Command::from_char`]; every other key is idle.
pub fn handle_key_event(key: KeyEvent) -> Command {
    if should_quit(key) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Char(ch) => Command::from_char(ch),
        _ => Command::Idle,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows SIGINT, so Ctrl+C is honoured here as well.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
