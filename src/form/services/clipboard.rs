//! # Clipboard Service
//!
//! Delivers the formatted command to a clipboard sink.
//! Supports both memory-based and system clipboard implementations.
//!
//! On X11 and Wayland the copying process serves the clipboard itself, so
//! its contents vanish on exit unless a clipboard manager takes them over.
//! [`ClipboardSink::hand_off`] runs once before exit to keep the last copy
//! reachable for a while.

use anyhow::Result;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ClipboardMode;
use crate::form::models::RequestDraft;

/// Destination for copied text
pub trait ClipboardSink: Send {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: String) -> Result<()>;

    /// Short label used in logs
    fn name(&self) -> &'static str;

    /// Keep the last copied text available after the process exits.
    /// Called once, after the form has closed or the command was printed.
    fn hand_off(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Memory-based clipboard
///
/// Clones share the same storage, so a test can keep one handle and
/// inspect what the form copied through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    content: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text, if any
    pub fn contents(&self) -> Option<String> {
        self.content.lock().ok().and_then(|c| c.clone())
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: String) -> Result<()> {
        tracing::debug!("Copying {} characters to memory clipboard", text.len());
        let mut content = self
            .content
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock memory clipboard: {}", e))?;
        *content = Some(text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// System clipboard backed by arboard
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
    last_copied: Option<String>,
    /// How long `hand_off` keeps serving the last copy
    hold: Duration,
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("clipboard", &"<system clipboard>")
            .field("hold", &self.hold)
            .finish()
    }
}

impl SystemClipboard {
    pub fn new(hold: Duration) -> Result<Self> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| anyhow::anyhow!("Failed to access system clipboard: {}", e))?;
        Ok(Self {
            clipboard,
            last_copied: None,
            hold,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: String) -> Result<()> {
        tracing::debug!("Copying {} characters to system clipboard", text.len());
        self.clipboard
            .set_text(text.as_str())
            .map_err(|e| anyhow::anyhow!("Failed to set clipboard text: {}", e))?;
        self.last_copied = Some(text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "system"
    }

    fn hand_off(&mut self) -> Result<()> {
        match self.last_copied.take() {
            Some(text) if !self.hold.is_zero() => {
                hold_selection(&mut self.clipboard, text, self.hold)
            }
            _ => Ok(()),
        }
    }
}

/// Serve `text` until another program replaces it or `hold` runs out.
/// Blocks the caller for that long.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn hold_selection(
    clipboard: &mut arboard::Clipboard,
    text: String,
    hold: Duration,
) -> Result<()> {
    use arboard::SetExtLinux;

    tracing::info!("Holding clipboard contents for {:?}", hold);
    eprintln!(
        "Keeping the command on the clipboard for up to {}s. Copy something else to release it sooner.",
        hold.as_secs()
    );
    clipboard
        .set()
        .wait_until(std::time::Instant::now() + hold)
        .text(text)
        .map_err(|e| anyhow::anyhow!("Failed to hold clipboard text: {}", e))
}

/// macOS and Windows keep clipboard contents after the owner exits
#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn hold_selection(
    _clipboard: &mut arboard::Clipboard,
    _text: String,
    _hold: Duration,
) -> Result<()> {
    Ok(())
}

/// Result of a copy request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// No URL, so there was nothing to copy
    Skipped,
    /// The command reached the sink
    Copied(String),
    /// The sink rejected the text
    Failed(String),
}

/// Service computing the command and handing it to a clipboard sink
pub struct CopyService {
    sink: Box<dyn ClipboardSink>,
}

impl fmt::Debug for CopyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyService")
            .field("sink", &self.sink.name())
            .finish()
    }
}

impl CopyService {
    /// Create a service for the configured clipboard mode.
    ///
    /// Falls back to a memory clipboard when the system clipboard cannot be
    /// opened (headless sessions, missing display server).
    pub fn new(mode: ClipboardMode, hold: Duration) -> Self {
        match mode {
            ClipboardMode::System => match SystemClipboard::new(hold) {
                Ok(clipboard) => {
                    tracing::info!("CopyService: Using system clipboard");
                    Self::with_sink(Box::new(clipboard))
                }
                Err(e) => {
                    tracing::warn!("CopyService: {}, falling back to memory clipboard", e);
                    Self::with_sink(Box::new(MemoryClipboard::new()))
                }
            },
            ClipboardMode::Memory => {
                tracing::info!("CopyService: Using memory clipboard");
                Self::with_sink(Box::new(MemoryClipboard::new()))
            }
        }
    }

    pub fn with_sink(sink: Box<dyn ClipboardSink>) -> Self {
        Self { sink }
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Let the sink keep the last copy alive past process exit
    pub fn hand_off(&mut self) -> Result<()> {
        tracing::debug!("CopyService: Handing off {} clipboard", self.sink.name());
        self.sink.hand_off()
    }

    /// Copy the draft's command. Never returns an error: failures are
    /// reported through [`CopyOutcome::Failed`].
    pub fn copy_draft(&mut self, draft: &RequestDraft) -> CopyOutcome {
        let command = draft.to_curl_command();
        if command.is_empty() {
            tracing::debug!("CopyService: Nothing to copy, URL is empty");
            return CopyOutcome::Skipped;
        }

        match self.sink.write_text(command.clone()) {
            Ok(()) => {
                tracing::info!(
                    "CopyService: Copied {} characters to {} clipboard",
                    command.len(),
                    self.sink.name()
                );
                CopyOutcome::Copied(command)
            }
            Err(e) => {
                tracing::warn!("CopyService: Copy failed: {}", e);
                CopyOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Sink recording every call, for checking call order
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingClipboard {
    calls: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingClipboard {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: String) -> Result<()> {
        self.calls.lock().unwrap().push(format!("write {text}"));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }

    fn hand_off(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push("hand_off".to_string());
        Ok(())
    }
}
