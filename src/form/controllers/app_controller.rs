//! # Form Application Controller
//!
//! Runs the event loop: reads input, maps keys to commands, applies the
//! resulting events to the view model and redraws.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::form::commands::{CommandContext, CommandRegistry, FormSnapshot};
use crate::form::io::{EventStream, RenderStream};
use crate::form::models::RequestDraft;
use crate::form::services::CopyService;
use crate::form::view_models::{ApplyResult, FormViewModel};
use crate::form::views::TerminalRenderer;

/// Poll timeout; also the granularity of notification expiry
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: FormViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller with injected I/O streams
    pub fn with_io_streams(
        draft: RequestDraft,
        copy_service: CopyService,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = FormViewModel::new(draft, copy_service);
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
        })
    }

    pub fn view_model(&self) -> &FormViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run until the user quits. The terminal is restored even when the
    /// loop fails, and the clipboard is handed off after that so any wait
    /// happens on the normal screen.
    pub fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        let result = self.run_loop();
        let cleanup = self.view_renderer.cleanup();
        if let Err(e) = self.view_model.hand_off_clipboard() {
            tracing::warn!("Clipboard hand-off failed: {}", e);
        }
        result.and(cleanup)
    }

    fn run_loop(&mut self) -> Result<()> {
        self.view_renderer.render_full(&self.view_model)?;

        while !self.should_quit {
            if let Some(event) = self.event_stream.next_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
            self.tick(Instant::now())?;
        }

        tracing::info!("Form closed");
        Ok(())
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                self.handle_key(key_event)
            }
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
                self.view_renderer.render_full(&self.view_model)
            }
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(FormSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;
        if events.is_empty() {
            return Ok(());
        }

        let now = Instant::now();
        let mut changed = false;
        for event in events {
            match self.view_model.apply(event, now)? {
                ApplyResult::Quit => {
                    self.should_quit = true;
                    return Ok(());
                }
                ApplyResult::Changed => changed = true,
                ApplyResult::Unchanged => {}
            }
        }

        if changed {
            self.view_renderer.render_full(&self.view_model)?;
        }
        Ok(())
    }

    /// Expire the notification if its time is up
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if self.view_model.expire_notification(now) {
            self.view_renderer.render_full(&self.view_model)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::events::FormField;
    use crate::form::io::{MockEventStream, MockRenderStream};
    use crate::form::models::{HttpMethod, NOTIFICATION_TTL};
    use crate::form::services::clipboard::RecordingClipboard;
    use crate::form::services::MemoryClipboard;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn typed(text: &str) -> Vec<Event> {
        text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
    }

    fn controller(
        events: Vec<Event>,
    ) -> (
        AppController<MockEventStream, MockRenderStream>,
        MemoryClipboard,
        MockRenderStream,
    ) {
        let clipboard = MemoryClipboard::new();
        let render_stream = MockRenderStream::new();
        let controller = AppController::with_io_streams(
            RequestDraft::new(),
            CopyService::with_sink(Box::new(clipboard.clone())),
            MockEventStream::new(events),
            render_stream.clone(),
        )
        .unwrap();
        (controller, clipboard, render_stream)
    }

    #[test]
    fn run_should_fill_form_copy_and_quit() {
        let mut events = vec![key(KeyCode::Right), key(KeyCode::Tab)];
        events.extend(typed("https://x.com"));
        events.push(key(KeyCode::Tab));
        events.extend(typed("Accept: */*"));
        events.push(key(KeyCode::Tab));
        events.extend(typed("{}"));
        events.push(Event::Key(KeyEvent::new(
            KeyCode::Char('y'),
            KeyModifiers::CONTROL,
        )));
        events.push(key(KeyCode::Esc));
        let (mut controller, clipboard, render_stream) = controller(events);

        controller.run().unwrap();

        assert!(controller.should_quit());
        assert_eq!(controller.view_model().draft().method(), HttpMethod::Post);
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("curl -X POST \"https://x.com\" \\\n  -H \"Accept: */*\" \\\n  -d '{}'")
        );
        assert!(!render_stream.in_session());
    }

    #[test]
    fn run_should_hand_off_clipboard_after_restoring_terminal() {
        let recorder = RecordingClipboard::default();
        let render_stream = MockRenderStream::new();
        let mut events = vec![key(KeyCode::Tab)];
        events.extend(typed("https://x.com"));
        events.push(Event::Key(KeyEvent::new(
            KeyCode::Char('y'),
            KeyModifiers::CONTROL,
        )));
        events.push(key(KeyCode::Esc));
        let mut controller = AppController::with_io_streams(
            RequestDraft::new(),
            CopyService::with_sink(Box::new(recorder.clone())),
            MockEventStream::new(events),
            render_stream.clone(),
        )
        .unwrap();

        controller.run().unwrap();

        assert_eq!(
            recorder.calls(),
            vec!["write curl -X GET \"https://x.com\"", "hand_off"]
        );
        assert!(!render_stream.in_session());
    }

    #[test]
    fn release_events_should_be_ignored() {
        let (mut controller, _, _) = controller(vec![]);
        controller.handle_event(key(KeyCode::Tab)).unwrap();

        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        controller.handle_event(Event::Key(release)).unwrap();

        assert_eq!(controller.view_model().focus(), FormField::Url);
        assert_eq!(controller.view_model().draft().url(), "");
    }

    #[test]
    fn resize_should_update_sizes_and_redraw() {
        let (mut controller, _, render_stream) = controller(vec![]);

        controller.handle_event(Event::Resize(120, 40)).unwrap();

        assert_eq!(controller.view_model().terminal_size(), (120, 40));
        assert!(render_stream.screen_output().contains("Curl Request Generator"));
    }

    #[test]
    fn tick_should_clear_expired_notification() {
        let (mut controller, _, render_stream) = controller(vec![]);
        controller.handle_event(key(KeyCode::Tab)).unwrap();
        for event in typed("https://x.com") {
            controller.handle_event(event).unwrap();
        }
        controller
            .handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('y'),
                KeyModifiers::CONTROL,
            )))
            .unwrap();
        assert!(render_stream.screen_output().contains("Copied!"));

        controller.tick(Instant::now() + NOTIFICATION_TTL).unwrap();

        assert!(controller.view_model().notification().is_none());
        assert!(!render_stream.screen_output().contains("Copied!"));
    }
}
