//! # Terminal Renderer
//!
//! Draws a [`ScreenLayout`] through a [`RenderStream`]. The whole page is
//! redrawn on every change. When the page is taller than the screen it is
//! scrolled by [`ScreenLayout::scroll_offset`].

use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::form::io::RenderStream;
use crate::form::view_models::FormViewModel;
use crate::form::views::layout::{build_layout, truncate_to_width, LineStyle, ScreenLine};

pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer over `render_stream`, reading its current size
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Switch the terminal into raw mode on the alternate screen
    pub fn initialize(&mut self) -> Result<()> {
        self.render_stream.begin_session()?;
        self.render_stream.clear_screen()?;
        Ok(())
    }

    /// Restore the terminal. Every step is attempted even if one fails.
    pub fn cleanup(&mut self) -> Result<()> {
        let shown = self.render_stream.set_cursor_visible(true);
        let ended = self.render_stream.end_session();
        shown.and(ended)
    }

    fn apply_style(&mut self, style: LineStyle) -> Result<()> {
        let stream = &mut self.render_stream;
        match style {
            LineStyle::Title => queue!(stream, SetAttribute(Attribute::Bold))?,
            LineStyle::Label => {}
            LineStyle::FocusedLabel => queue!(
                stream,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Cyan)
            )?,
            LineStyle::Text => {}
            LineStyle::Placeholder | LineStyle::DisabledButton => {
                queue!(stream, SetAttribute(Attribute::Dim))?
            }
            LineStyle::Selector => queue!(stream, SetForegroundColor(Color::Yellow))?,
            LineStyle::Button => queue!(stream, SetAttribute(Attribute::Reverse))?,
            LineStyle::Preview => queue!(stream, SetForegroundColor(Color::Green))?,
            LineStyle::Hint => queue!(stream, SetForegroundColor(Color::DarkGrey))?,
            LineStyle::Info => queue!(
                stream,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Green)
            )?,
            LineStyle::Error => queue!(
                stream,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Red)
            )?,
        }
        Ok(())
    }

    fn render_line(&mut self, row: u16, line: &ScreenLine) -> Result<()> {
        let width = self.terminal_size.0 as usize;
        self.render_stream.move_cursor(0, row)?;
        self.apply_style(line.style)?;
        queue!(
            self.render_stream,
            Print(truncate_to_width(&line.text, width)),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    /// Redraw the entire form
    pub fn render_full(&mut self, view_model: &FormViewModel) -> Result<()> {
        let layout = build_layout(view_model);
        let (width, height) = self.terminal_size;
        // Last row belongs to the footer
        let body_rows = height.saturating_sub(1) as usize;

        self.render_stream.set_cursor_visible(false)?;
        self.render_stream.clear_screen()?;

        let offset = layout.scroll_offset(body_rows);
        for (row, line) in layout.lines.iter().skip(offset).take(body_rows).enumerate() {
            self.render_line(row as u16, line)?;
        }
        if height > 0 {
            self.render_line(height - 1, &layout.footer)?;
        }

        match layout.cursor {
            Some((column, row))
                if row >= offset && row - offset < body_rows && column < width as usize =>
            {
                self.render_stream.move_cursor(column as u16, (row - offset) as u16)?;
                self.render_stream.set_cursor_visible(true)?;
            }
            _ => {}
        }

        self.render_stream.flush()?;
        Ok(())
    }
}
