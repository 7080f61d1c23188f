//! TerminalRenderer: flushes text frames to a real terminal.
//!
//! Every frame is a full redraw: clear, home the cursor, print the rows.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::Screen;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Clear the screen and draw `frame`.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalRenderer {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.draw(frame)
    }
}

/// Encode a full-screen redraw of `frame` into `out`.
///
/// Raw mode does not translate `\n`, so each row ends with `\r\n`.
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &str, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    for line in frame.lines() {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}
