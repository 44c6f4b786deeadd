//! # Copy Commands
//!
//! Both the Ctrl+Y shortcut and the "Generate Curl" button end in
//! [`CommandEvent::CopyRequested`].

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::form::events::FormField;

/// Copy from anywhere (Ctrl+Y)
pub struct CopyShortcutCommand;

impl Command for CopyShortcutCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('y')) && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CopyRequested])
    }

    fn name(&self) -> &'static str {
        "CopyShortcut"
    }
}

/// Press the button (Enter or Space while it has focus).
///
/// The button is disabled until a URL is entered.
pub struct PressButtonCommand;

impl Command for PressButtonCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.focus() == FormField::Button
            && context.state.has_url
            && matches!(event.code, KeyCode::Enter | KeyCode::Char(' '))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CopyRequested])
    }

    fn name(&self) -> &'static str {
        "PressButton"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::commands::test_context;
    use crate::form::models::HttpMethod;

    #[test]
    fn ctrl_y_should_copy_from_text_fields() {
        let context = test_context(FormField::Headers, HttpMethod::Post, true);
        let event = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);

        assert!(CopyShortcutCommand.is_relevant(&context, &event));
        assert_eq!(
            CopyShortcutCommand.execute(event, &context).unwrap(),
            vec![CommandEvent::CopyRequested]
        );
    }

    #[test]
    fn disabled_button_should_ignore_enter() {
        let context = test_context(FormField::Button, HttpMethod::Get, false);
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert!(!PressButtonCommand.is_relevant(&context, &event));
    }

    #[test]
    fn enabled_button_should_accept_space() {
        let context = test_context(FormField::Button, HttpMethod::Get, true);
        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);

        assert!(PressButtonCommand.is_relevant(&context, &event));
    }
}
