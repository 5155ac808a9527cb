//! TerminalRenderer: flushes text lines to a real terminal.
//!
//! Frames are lists of lines. Only lines that differ from the previous frame
//! are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Vec<String>>,
    buf: Vec<u8>,
    enhanced_keyboard: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            enhanced_keyboard: false,
        }
    }

    /// Ask the terminal for key release events on `enter`.
    pub fn with_enhanced_keyboard(mut self, enabled: bool) -> Self {
        self.enhanced_keyboard = enabled;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.enhanced_keyboard {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.enhanced_keyboard {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, rewriting only the lines that changed.
    pub fn draw_lines(&mut self, lines: &[String]) -> Result<()> {
        self.buf.clear();
        match self.last.as_deref() {
            Some(prev) => encode_diff_into(prev, lines, &mut self.buf)?,
            None => encode_full_into(lines, &mut self.buf)?,
        }
        self.flush_buf()?;

        let last = self.last.get_or_insert_with(Vec::new);
        last.clear();
        last.extend(lines.iter().cloned());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for (y, line) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

/// Encode only the lines that differ between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &[String], next: &[String], out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_line(prev, next, |y, line| {
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.queue(Print(line))?;
        Ok(())
    })
}

/// Visit every row whose content changed. Rows that disappeared are visited
/// with an empty line so they get cleared.
fn for_each_changed_line(
    prev: &[String],
    next: &[String],
    mut f: impl FnMut(u16, &str) -> Result<()>,
) -> Result<()> {
    let rows = prev.len().max(next.len());
    for y in 0..rows {
        let a = prev.get(y).map(String::as_str);
        let b = next.get(y).map(String::as_str);
        if a != b {
            f(y as u16, b.unwrap_or(""))?;
        }
    }
    Ok(())
}
