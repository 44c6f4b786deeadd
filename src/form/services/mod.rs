//! # Services Layer
//!
//! Services wrap external resources the form touches. The clipboard is the
//! only one: formatting itself is a pure function and needs no service.

pub mod clipboard;

pub use clipboard::{ClipboardSink, CopyOutcome, CopyService, MemoryClipboard, SystemClipboard};
