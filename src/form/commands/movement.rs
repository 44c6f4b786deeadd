//! # Cursor Movement Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent, MovementDirection};

/// Arrow keys, Home and End inside a text field
pub struct MoveCursorCommand;

impl MoveCursorCommand {
    fn direction(code: KeyCode) -> Option<MovementDirection> {
        match code {
            KeyCode::Left => Some(MovementDirection::Left),
            KeyCode::Right => Some(MovementDirection::Right),
            KeyCode::Up => Some(MovementDirection::Up),
            KeyCode::Down => Some(MovementDirection::Down),
            KeyCode::Home => Some(MovementDirection::LineStart),
            KeyCode::End => Some(MovementDirection::LineEnd),
            _ => None,
        }
    }
}

impl Command for MoveCursorCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.focus().is_text_input() && Self::direction(event.code).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::direction(event.code)
            .map(CommandEvent::cursor_move)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "MoveCursor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::commands::test_context;
    use crate::form::events::FormField;
    use crate::form::models::HttpMethod;
    use crossterm::event::KeyModifiers;

    #[test]
    fn home_and_end_should_map_to_line_bounds() {
        let context = test_context(FormField::Url, HttpMethod::Get, true);

        let home = KeyEvent::new(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(
            MoveCursorCommand.execute(home, &context).unwrap(),
            vec![CommandEvent::cursor_move(MovementDirection::LineStart)]
        );

        let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(
            MoveCursorCommand.execute(end, &context).unwrap(),
            vec![CommandEvent::cursor_move(MovementDirection::LineEnd)]
        );
    }

    #[test]
    fn movement_should_not_apply_to_button() {
        let context = test_context(FormField::Button, HttpMethod::Get, true);
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);

        assert!(!MoveCursorCommand.is_relevant(&context, &left));
    }
}
