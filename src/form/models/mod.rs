//! # Form Models
//!
//! Plain data held by the form. No terminal or clipboard concerns here.

pub mod method;
pub mod notification;
pub mod request_draft;

pub use method::{HttpMethod, MethodParseError};
pub use notification::{Notification, NotificationKind, NOTIFICATION_TTL};
pub use request_draft::RequestDraft;
