use std::fmt;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;

use curlform::form::events::FormField;
use curlform::form::io::{MockEventStream, MockRenderStream};
use curlform::form::services::{ClipboardSink, CopyService, MemoryClipboard};
use curlform::{AppController, RequestDraft};

/// Clipboard that refuses every write, standing in for a denied permission
pub struct DeniedClipboard;

impl ClipboardSink for DeniedClipboard {
    fn write_text(&mut self, _text: String) -> Result<()> {
        Err(anyhow::anyhow!("clipboard access denied"))
    }

    fn name(&self) -> &'static str {
        "denied"
    }
}

/// Drives the real controller with scripted keys and mock terminal output
#[derive(World)]
#[world(init = Self::new)]
pub struct FormWorld {
    pub controller: AppController<MockEventStream, MockRenderStream>,
    pub clipboard: MemoryClipboard,
    pub render_stream: MockRenderStream,
}

impl fmt::Debug for FormWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormWorld")
            .field("draft", self.controller.view_model().draft())
            .field("focus", &self.controller.view_model().focus())
            .field("clipboard", &self.clipboard.contents())
            .finish()
    }
}

impl FormWorld {
    pub fn new() -> Self {
        let clipboard = MemoryClipboard::new();
        let service = CopyService::with_sink(Box::new(clipboard.clone()));
        Self::with_copy_service(service, clipboard)
    }

    pub fn with_copy_service(service: CopyService, clipboard: MemoryClipboard) -> Self {
        let render_stream = MockRenderStream::new();
        let controller = AppController::with_io_streams(
            RequestDraft::new(),
            service,
            MockEventStream::empty(),
            render_stream.clone(),
        )
        .expect("controller should build over mock streams");

        Self {
            controller,
            clipboard,
            render_stream,
        }
    }

    /// Replace the form with one whose clipboard rejects writes
    pub fn use_denied_clipboard(&mut self) {
        let service = CopyService::with_sink(Box::new(DeniedClipboard));
        *self = Self::with_copy_service(service, MemoryClipboard::new());
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.controller
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)))
            .expect("key event should be handled");
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    pub fn focus(&self) -> FormField {
        self.controller.view_model().focus()
    }

    /// Tab until `field` has focus
    pub fn focus_field(&mut self, field: FormField) {
        for _ in 0..FormField::ORDER.len() {
            if self.focus() == field {
                return;
            }
            self.send_key(KeyCode::Tab, KeyModifiers::NONE);
        }
        assert_eq!(self.focus(), field, "field is not reachable with Tab");
    }

    pub fn command(&self) -> String {
        self.controller.view_model().preview()
    }

    pub fn screen(&self) -> String {
        self.render_stream.screen_output()
    }
}

pub fn parse_field(name: &str) -> FormField {
    match name.to_lowercase().as_str() {
        "method" => FormField::Method,
        "url" => FormField::Url,
        "headers" => FormField::Headers,
        "body" => FormField::Body,
        "button" => FormField::Button,
        other => panic!("unknown field '{other}'"),
    }
}

pub fn parse_key(name: &str) -> KeyCode {
    match name {
        "Tab" => KeyCode::Tab,
        "BackTab" => KeyCode::BackTab,
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "Space" => KeyCode::Char(' '),
        other => panic!("unknown key '{other}'"),
    }
}
