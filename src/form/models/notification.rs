//! # Notification Model
//!
//! Transient acknowledgement shown after a copy. Each notification carries
//! its own expiry so the event loop can drop it on a poll tick.

use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    title: String,
    description: String,
    kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            expires_at: now + NOTIFICATION_TTL,
        }
    }

    pub fn copied(now: Instant) -> Self {
        Self::new(
            "Copied!",
            "Your curl command has been copied to clipboard",
            NotificationKind::Info,
            now,
        )
    }

    pub fn copy_failed(reason: &str, now: Instant) -> Self {
        Self::new("Copy failed", reason, NotificationKind::Error, now)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
