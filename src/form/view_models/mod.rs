//! # View Models
//!
//! Form state and the logic that mutates it in response to command events.

pub mod form_view_model;
pub mod text_field;

pub use form_view_model::{ApplyResult, FormViewModel};
pub use text_field::TextField;
