//! # Scripted Streams
//!
//! Queued events in, recorded drawing out. Used by unit tests and by the
//! cucumber world to drive the form without a TTY.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Events handed out in the order they were queued
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// True once every queued event has been read
    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStream for MockEventStream {
    /// Never waits: an empty queue reads as a timeout
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}

/// One recorded call on a [`MockRenderStream`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    BeginSession,
    EndSession,
    ClearScreen,
    MoveCursor(u16, u16),
    CursorVisible(bool),
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug, Default)]
struct MockState {
    commands: Vec<RenderCommand>,
    /// Bytes written since the last clear_screen
    screen: Vec<u8>,
    cursor_visible: bool,
    in_session: bool,
}

/// Recording render stream with a fixed size
///
/// Clones share the same recording, so a test can hand one clone to the
/// renderer and inspect the output through another.
#[derive(Debug, Clone)]
pub struct MockRenderStream {
    state: Arc<Mutex<MockState>>,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(terminal_size: TerminalSize) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                cursor_visible: true,
                ..MockState::default()
            })),
            terminal_size,
        }
    }

    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.state.lock().unwrap().commands.clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.state.lock().unwrap().commands.contains(command)
    }

    /// Everything written since the last screen clear, escape codes included
    pub fn screen_output(&self) -> String {
        String::from_utf8_lossy(&self.state.lock().unwrap().screen).to_string()
    }

    /// True between `begin_session` and `end_session`
    pub fn in_session(&self) -> bool {
        self.state.lock().unwrap().in_session
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.state.lock().unwrap().cursor_visible
    }

    fn record(&self, command: RenderCommand) {
        self.state.lock().unwrap().commands.push(command);
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut state = self.state.lock().unwrap();
        state.screen.extend_from_slice(buf);
        state.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn begin_session(&mut self) -> Result<()> {
        self.record(RenderCommand::BeginSession);
        self.state.lock().unwrap().in_session = true;
        Ok(())
    }

    fn end_session(&mut self) -> Result<()> {
        self.record(RenderCommand::EndSession);
        self.state.lock().unwrap().in_session = false;
        Ok(())
    }

    fn size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        self.state.lock().unwrap().screen.clear();
        Ok(())
    }

    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(column, row));
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.record(RenderCommand::CursorVisible(visible));
        self.state.lock().unwrap().cursor_visible = visible;
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
