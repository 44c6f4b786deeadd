//! # Text Editing Commands
//!
//! Commands for text insertion and deletion in the URL, Headers and Body
//! fields.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent, MovementDirection};

/// Insert a typed character
pub struct InsertCharCommand;

impl Command for InsertCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Char(ch) => {
                !event.modifiers.contains(KeyModifiers::CONTROL)
                    && !event.modifiers.contains(KeyModifiers::ALT)
                    && !ch.is_control()
                    && context.focus().is_text_input()
            }
            _ => false,
        }
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if let KeyCode::Char(ch) = event.code {
            Ok(vec![CommandEvent::text_insert(ch.to_string())])
        } else {
            Ok(vec![])
        }
    }

    fn name(&self) -> &'static str {
        "InsertChar"
    }
}

/// Insert new line (Enter in Headers or Body)
pub struct InsertNewLineCommand;

impl Command for InsertNewLineCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Enter) && context.focus().is_multiline()
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::text_insert("\n")])
    }

    fn name(&self) -> &'static str {
        "InsertNewLine"
    }
}

/// Backspace and Delete
pub struct DeleteCharCommand;

impl Command for DeleteCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Backspace | KeyCode::Delete) && context.focus().is_text_input()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let direction = if matches!(event.code, KeyCode::Backspace) {
            MovementDirection::Left
        } else {
            MovementDirection::Right
        };
        Ok(vec![CommandEvent::TextDeleteRequested { direction }])
    }

    fn name(&self) -> &'static str {
        "DeleteChar"
    }
}
