//! # Terminal I/O Seams
//!
//! The controller reads events from an [`EventStream`] and the renderer
//! draws through a [`RenderStream`]. Production wires both to crossterm;
//! tests wire them to scripted events and a recording buffer.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event
//!              TerminalRenderer ──▶ TerminalRenderStream ──▶ stdout
//!
//! Testing:     AppController ──▶ MockEventStream ──▶ VecDeque<Event>
//!              TerminalRenderer ──▶ MockRenderStream ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// (width, height) in cells
pub type TerminalSize = (u16, u16);

/// Source of key and resize events
pub trait EventStream: Send {
    /// Wait up to `timeout` for the next event. `Ok(None)` means the wait
    /// ran out with nothing to read.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Drawing surface for the form. Styled text goes through `Write`.
pub trait RenderStream: Write + Send {
    /// Enter raw mode on the alternate screen
    fn begin_session(&mut self) -> Result<()>;

    /// Leave the alternate screen and raw mode. Both steps are attempted
    /// even if the first fails.
    fn end_session(&mut self) -> Result<()>;

    fn size(&self) -> Result<TerminalSize>;

    fn clear_screen(&mut self) -> Result<()>;

    /// Move the cursor to (column, row)
    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;
}
