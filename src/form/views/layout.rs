//! # Screen Layout
//!
//! Turns the view model into styled lines and a cursor position. Kept free
//! of terminal calls so the page structure can be tested directly.
//!
//! Field text and the preview wrap at the terminal width, breaking between
//! any two characters. Nothing is clipped; a page taller than the screen
//! is scrolled by the renderer using [`ScreenLayout::scroll_offset`].

use unicode_width::UnicodeWidthChar;

use crate::form::events::FormField;
use crate::form::models::NotificationKind;
use crate::form::view_models::FormViewModel;

pub const TITLE: &str = "Curl Request Generator";
pub const COPY_HINT: &str = "[copy: Ctrl+Y]";
pub const HELP_TEXT: &str = "Tab/Shift+Tab: move  ←/→: method  Ctrl+Y: copy  Esc: quit";

/// Column where field content starts
pub const INDENT: usize = 2;

/// Minimum rows reserved for the Headers and Body text areas
pub const TEXT_AREA_MIN_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Label,
    FocusedLabel,
    Text,
    Placeholder,
    Selector,
    Button,
    DisabledButton,
    Preview,
    Hint,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub text: String,
    pub style: LineStyle,
}

impl ScreenLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Text)
    }
}

/// Rendered page: body lines from the top, one footer line at the bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub lines: Vec<ScreenLine>,
    pub footer: ScreenLine,
    /// (column, row) of the text cursor when a text field has focus
    pub cursor: Option<(usize, usize)>,
    /// Row of the focused field's label, or of the button
    pub focus_row: usize,
}

impl ScreenLayout {
    /// Plain text of every body line, for assertions and debugging
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// First line to draw when only `visible_rows` fit.
    ///
    /// The bottom of the page (button and preview) is shown when possible.
    /// The focused label and the cursor always stay visible, and win over
    /// the preview on screens too short for both.
    pub fn scroll_offset(&self, visible_rows: usize) -> usize {
        let total = self.lines.len();
        if visible_rows == 0 || total <= visible_rows {
            return 0;
        }

        let mut offset = (total - visible_rows).min(self.focus_row);
        if let Some((_, row)) = self.cursor {
            if row >= offset + visible_rows {
                offset = row + 1 - visible_rows;
            }
        }
        offset
    }
}

fn indented(text: &str) -> String {
    format!("{}{}", " ".repeat(INDENT), text)
}

/// Columns available to field content and the preview
fn content_width(view_model: &FormViewModel) -> usize {
    (view_model.terminal_size().0 as usize)
        .saturating_sub(INDENT)
        .max(1)
}

fn label(lines: &mut Vec<ScreenLine>, field: FormField, focus: FormField, focus_row: &mut usize) {
    if field == focus {
        *focus_row = lines.len();
    }
    let style = if field == focus {
        LineStyle::FocusedLabel
    } else {
        LineStyle::Label
    };
    let marker = if field == focus { "▸ " } else { "  " };
    lines.push(ScreenLine::new(format!("{marker}{}", field.label()), style));
}

fn text_area(
    lines: &mut Vec<ScreenLine>,
    view_model: &FormViewModel,
    field: FormField,
    min_rows: usize,
    cursor: &mut Option<(usize, usize)>,
) {
    let Some(text_field) = view_model.text_field(field) else {
        return;
    };
    let width = content_width(view_model);
    let focused = view_model.focus() == field;
    let first_row = lines.len();

    if text_field.is_empty() {
        if focused {
            *cursor = Some((INDENT, first_row));
        }
        for placeholder_line in field.placeholder().split('\n') {
            push_wrapped(lines, placeholder_line, width, LineStyle::Placeholder);
        }
    } else {
        let position = text_field.cursor_position();
        for (index, text_line) in text_field.lines().into_iter().enumerate() {
            if focused && index == position.line {
                let (row, column) = wrapped_position(text_line, position.column, width);
                *cursor = Some((INDENT + column, lines.len() + row));
            }
            push_wrapped(lines, text_line, width, LineStyle::Text);
        }
    }

    // A cursor at the exact end of a full row sits on a row of its own
    if let (true, Some((_, row))) = (focused, *cursor) {
        while lines.len() <= row {
            lines.push(ScreenLine::blank());
        }
    }
    while lines.len() - first_row < min_rows {
        lines.push(ScreenLine::blank());
    }
}

fn push_wrapped(lines: &mut Vec<ScreenLine>, text: &str, width: usize, style: LineStyle) {
    for row in wrap_to_width(text, width) {
        lines.push(ScreenLine::new(indented(&row), style));
    }
}

/// Lay out the whole form
pub fn build_layout(view_model: &FormViewModel) -> ScreenLayout {
    let focus = view_model.focus();
    let width = content_width(view_model);
    let mut lines = Vec::new();
    let mut cursor = None;
    let mut focus_row = 0;

    lines.push(ScreenLine::new(TITLE, LineStyle::Title));
    lines.push(ScreenLine::blank());

    label(&mut lines, FormField::Method, focus, &mut focus_row);
    lines.push(ScreenLine::new(
        indented(&format!("< {} >", view_model.draft().method())),
        LineStyle::Selector,
    ));
    lines.push(ScreenLine::blank());

    label(&mut lines, FormField::Url, focus, &mut focus_row);
    text_area(&mut lines, view_model, FormField::Url, 1, &mut cursor);
    lines.push(ScreenLine::blank());

    label(&mut lines, FormField::Headers, focus, &mut focus_row);
    text_area(
        &mut lines,
        view_model,
        FormField::Headers,
        TEXT_AREA_MIN_ROWS,
        &mut cursor,
    );
    lines.push(ScreenLine::blank());

    if view_model.is_body_visible() {
        label(&mut lines, FormField::Body, focus, &mut focus_row);
        text_area(
            &mut lines,
            view_model,
            FormField::Body,
            TEXT_AREA_MIN_ROWS,
            &mut cursor,
        );
        lines.push(ScreenLine::blank());
    }

    if focus == FormField::Button {
        focus_row = lines.len();
    }
    let marker = if focus == FormField::Button { "▸ " } else { "  " };
    let button_style = if view_model.is_button_enabled() {
        LineStyle::Button
    } else {
        LineStyle::DisabledButton
    };
    lines.push(ScreenLine::new(
        format!("{marker}[ {} ]", FormField::Button.label()),
        button_style,
    ));

    if view_model.is_preview_visible() {
        lines.push(ScreenLine::blank());
        for preview_line in view_model.preview().lines() {
            push_wrapped(&mut lines, preview_line, width, LineStyle::Preview);
        }
        lines.push(ScreenLine::new(indented(COPY_HINT), LineStyle::Hint));
    }

    let footer = match view_model.notification() {
        Some(notification) => {
            let style = match notification.kind() {
                NotificationKind::Info => LineStyle::Info,
                NotificationKind::Error => LineStyle::Error,
            };
            ScreenLine::new(
                format!("{} {}", notification.title(), notification.description()),
                style,
            )
        }
        None => ScreenLine::new(HELP_TEXT, LineStyle::Hint),
    };

    ScreenLayout {
        lines,
        footer,
        cursor,
        focus_row,
    }
}

/// Split `text` into rows of at most `width` columns, breaking between any
/// two characters. Always returns at least one row.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used > 0 && used + ch_width > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used += ch_width;
        current.push(ch);
    }
    rows.push(current);
    rows
}

/// (row, column) of the cursor before char `index` once `text` is wrapped
/// by [`wrap_to_width`]
fn wrapped_position(text: &str, index: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    let (mut row, mut column) = (0, 0);
    for ch in text.chars().take(index) {
        let ch_width = ch.width().unwrap_or(0);
        if column > 0 && column + ch_width > width {
            row += 1;
            column = 0;
        }
        column += ch_width;
    }
    if column >= width {
        (row + 1, 0)
    } else {
        (row, column)
    }
}

/// Cut `text` so it occupies at most `width` terminal columns
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out
}
