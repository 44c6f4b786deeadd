//! # Form View Model
//!
//! Owns the draft, the text fields that edit it, the focus, and the copy
//! service. Every edit is written straight back into the draft, so the
//! preview is always `draft().to_curl_command()` and is never cached.

use std::time::Instant;

use anyhow::Result;

use crate::form::commands::{CommandEvent, MovementDirection};
use crate::form::events::{FormField, LogicalPosition};
use crate::form::models::{HttpMethod, Notification, RequestDraft};
use crate::form::services::{CopyOutcome, CopyService};
use crate::form::view_models::TextField;

/// Result of applying one command event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// Nothing visible changed
    Unchanged,
    /// The screen needs a redraw
    Changed,
    /// The user asked to leave
    Quit,
}

#[derive(Debug)]
pub struct FormViewModel {
    draft: RequestDraft,
    url: TextField,
    headers: TextField,
    body: TextField,
    focus: FormField,
    copy_service: CopyService,
    notification: Option<Notification>,
    terminal_size: (u16, u16),
}

impl FormViewModel {
    /// Create a view model whose fields start from `draft`
    pub fn new(draft: RequestDraft, copy_service: CopyService) -> Self {
        let url = TextField::single_line().with_text(draft.url());
        let headers = TextField::multi_line().with_text(draft.headers_text());
        let body = TextField::multi_line().with_text(draft.body_text());
        let mut view_model = Self {
            draft,
            url,
            headers,
            body,
            focus: FormField::Method,
            copy_service,
            notification: None,
            terminal_size: (80, 24),
        };
        // Single-line normalization may have changed the URL
        view_model.sync_draft(FormField::Url);
        view_model
    }

    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    /// Live formatted command; empty when no URL is set
    pub fn preview(&self) -> String {
        self.draft.to_curl_command()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// The Body field is only shown for methods that carry a body
    pub fn is_body_visible(&self) -> bool {
        self.draft.method().allows_body()
    }

    /// The button stays disabled until a URL is entered
    pub fn is_button_enabled(&self) -> bool {
        self.draft.has_url()
    }

    pub fn is_preview_visible(&self) -> bool {
        self.draft.has_url()
    }

    /// Fields that can currently take focus, in tab order
    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::ORDER
            .iter()
            .copied()
            .filter(|field| *field != FormField::Body || self.is_body_visible())
            .collect()
    }

    pub fn text_field(&self, field: FormField) -> Option<&TextField> {
        match field {
            FormField::Url => Some(&self.url),
            FormField::Headers => Some(&self.headers),
            FormField::Body => Some(&self.body),
            FormField::Method | FormField::Button => None,
        }
    }

    fn text_field_mut(&mut self, field: FormField) -> Option<&mut TextField> {
        match field {
            FormField::Url => Some(&mut self.url),
            FormField::Headers => Some(&mut self.headers),
            FormField::Body => Some(&mut self.body),
            FormField::Method | FormField::Button => None,
        }
    }

    /// Cursor of the focused text field
    pub fn cursor_position(&self) -> Option<LogicalPosition> {
        self.text_field(self.focus).map(TextField::cursor_position)
    }

    fn sync_draft(&mut self, field: FormField) {
        match field {
            FormField::Url => self.draft.set_url(self.url.text().to_string()),
            FormField::Headers => self
                .draft
                .set_headers_text(self.headers.text().to_string()),
            FormField::Body => self.draft.set_body_text(self.body.text().to_string()),
            FormField::Method | FormField::Button => {}
        }
    }

    pub fn set_focus(&mut self, field: FormField) -> bool {
        if !self.visible_fields().contains(&field) || self.focus == field {
            return false;
        }
        tracing::debug!("Focus {:?} -> {:?}", self.focus, field);
        self.focus = field;
        true
    }

    fn move_focus(&mut self, forward: bool) -> bool {
        let fields = self.visible_fields();
        let current = fields
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.set_focus(fields[next])
    }

    pub fn set_method(&mut self, method: HttpMethod) {
        self.draft.set_method(method);
        if self.focus == FormField::Body && !method.allows_body() {
            self.focus = FormField::Button;
        }
    }

    pub fn set_url(&mut self, url: &str) {
        self.url.set_text(url);
        self.sync_draft(FormField::Url);
    }

    pub fn set_headers_text(&mut self, headers_text: &str) {
        self.headers.set_text(headers_text);
        self.sync_draft(FormField::Headers);
    }

    pub fn set_body_text(&mut self, body_text: &str) {
        self.body.set_text(body_text);
        self.sync_draft(FormField::Body);
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextField) -> bool) -> bool {
        let field = self.focus;
        let changed = match self.text_field_mut(field) {
            Some(text_field) => edit(text_field),
            None => false,
        };
        if changed {
            self.sync_draft(field);
        }
        changed
    }

    /// Copy the formatted command.
    ///
    /// An empty command is a no-op. Clipboard failures turn into an error
    /// notification and never leave this method.
    pub fn copy_to_clipboard(&mut self, now: Instant) -> CopyOutcome {
        let outcome = self.copy_service.copy_draft(&self.draft);
        match &outcome {
            CopyOutcome::Skipped => {}
            CopyOutcome::Copied(_) => self.notification = Some(Notification::copied(now)),
            CopyOutcome::Failed(reason) => {
                self.notification = Some(Notification::copy_failed(reason, now))
            }
        }
        outcome
    }

    /// Let the clipboard outlive the process before exit
    pub fn hand_off_clipboard(&mut self) -> Result<()> {
        self.copy_service.hand_off()
    }

    /// Drop the notification once it has expired. Returns true if one was removed.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        match &self.notification {
            Some(notification) if notification.is_expired(now) => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    /// Apply a command event produced by the command registry
    pub fn apply(&mut self, event: CommandEvent, now: Instant) -> Result<ApplyResult> {
        let changed = match event {
            CommandEvent::QuitRequested => return Ok(ApplyResult::Quit),
            CommandEvent::FocusNextRequested => self.move_focus(true),
            CommandEvent::FocusPreviousRequested => self.move_focus(false),
            CommandEvent::MethodCycleRequested { forward } => {
                let current = self.draft.method();
                let method = if forward {
                    current.next()
                } else {
                    current.previous()
                };
                self.set_method(method);
                true
            }
            CommandEvent::TextInsertRequested { text } => {
                self.edit_focused(|field| field.insert_str(&text))
            }
            CommandEvent::TextDeleteRequested { direction } => match direction {
                MovementDirection::Left => self.edit_focused(TextField::backspace),
                MovementDirection::Right => self.edit_focused(TextField::delete),
                _ => false,
            },
            CommandEvent::CursorMoveRequested { direction } => {
                self.edit_focused_cursor(direction)
            }
            CommandEvent::CopyRequested => {
                !matches!(self.copy_to_clipboard(now), CopyOutcome::Skipped)
            }
        };

        Ok(if changed {
            ApplyResult::Changed
        } else {
            ApplyResult::Unchanged
        })
    }

    fn edit_focused_cursor(&mut self, direction: MovementDirection) -> bool {
        let field = self.focus;
        let Some(text_field) = self.text_field_mut(field) else {
            return false;
        };
        match direction {
            MovementDirection::Left => text_field.move_left(),
            MovementDirection::Right => text_field.move_right(),
            MovementDirection::Up => text_field.move_up(),
            MovementDirection::Down => text_field.move_down(),
            MovementDirection::LineStart => text_field.move_line_start(),
            MovementDirection::LineEnd => text_field.move_line_end(),
        }
    }
}
