//! # Command Context
//!
//! Read-only view of the form handed to commands.

use crate::form::events::FormField;
use crate::form::models::HttpMethod;
use crate::form::view_models::FormViewModel;

/// Read-only snapshot of view model state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub focus: FormField,
    pub method: HttpMethod,
    pub has_url: bool,
}

impl FormSnapshot {
    /// Create snapshot from current view model state
    pub fn from_view_model(view_model: &FormViewModel) -> Self {
        Self {
            focus: view_model.focus(),
            method: view_model.draft().method(),
            has_url: view_model.draft().has_url(),
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: FormSnapshot,
}

impl CommandContext {
    pub fn new(state: FormSnapshot) -> Self {
        Self { state }
    }

    pub fn focus(&self) -> FormField {
        self.state.focus
    }
}
