//! # Focus Navigation Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::form::events::FormField;

/// Next field (Tab)
pub struct FocusNextCommand;

impl Command for FocusNextCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Tab) && !event.modifiers.contains(KeyModifiers::SHIFT)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusNextRequested])
    }

    fn name(&self) -> &'static str {
        "FocusNext"
    }
}

/// Previous field (Shift+Tab). Terminals report it as BackTab.
pub struct FocusPreviousCommand;

impl Command for FocusPreviousCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::BackTab => true,
            KeyCode::Tab => event.modifiers.contains(KeyModifiers::SHIFT),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusPreviousRequested])
    }

    fn name(&self) -> &'static str {
        "FocusPrevious"
    }
}

/// Enter on single-line controls moves on to the next field
pub struct AdvanceOnEnterCommand;

impl Command for AdvanceOnEnterCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Enter)
            && matches!(context.focus(), FormField::Method | FormField::Url)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusNextRequested])
    }

    fn name(&self) -> &'static str {
        "AdvanceOnEnter"
    }
}
