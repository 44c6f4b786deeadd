//! crossterm-backed streams. No other module talks to the terminal.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Render stream over any writer, stdout by default
pub struct TerminalRenderStream<W: Write = io::Stdout> {
    writer: W,
}

impl TerminalRenderStream {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn begin_session(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.writer, EnterAlternateScreen)?;
        Ok(())
    }

    fn end_session(&mut self) -> Result<()> {
        let left = execute!(self.writer, LeaveAlternateScreen);
        let raw = terminal::disable_raw_mode();
        left.and(raw)?;
        Ok(())
    }

    fn size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.writer, terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()> {
        execute!(self.writer, cursor::MoveTo(column, row))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            execute!(self.writer, cursor::Show)?;
        } else {
            execute!(self.writer, cursor::Hide)?;
        }
        Ok(())
    }
}
