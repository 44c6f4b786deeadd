//! # Method Selector Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};
use crate::form::events::FormField;

/// Cycle the method (Left/Up go back, Right/Down/Space go forward)
pub struct CycleMethodCommand;

impl Command for CycleMethodCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.focus() == FormField::Method
            && matches!(
                event.code,
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ')
            )
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let forward = !matches!(event.code, KeyCode::Left | KeyCode::Up);
        Ok(vec![CommandEvent::MethodCycleRequested { forward }])
    }

    fn name(&self) -> &'static str {
        "CycleMethod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::commands::test_context;
    use crate::form::models::HttpMethod;
    use crossterm::event::KeyModifiers;

    #[test]
    fn arrows_should_cycle_in_both_directions() {
        let context = test_context(FormField::Method, HttpMethod::Get, false);

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            CycleMethodCommand.execute(left, &context).unwrap(),
            vec![CommandEvent::MethodCycleRequested { forward: false }]
        );

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(
            CycleMethodCommand.execute(space, &context).unwrap(),
            vec![CommandEvent::MethodCycleRequested { forward: true }]
        );
    }

    #[test]
    fn arrows_outside_selector_should_not_cycle() {
        let context = test_context(FormField::Url, HttpMethod::Get, false);
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);

        assert!(!CycleMethodCommand.is_relevant(&context, &right));
    }
}
