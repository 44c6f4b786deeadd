//! # Command Pattern Implementation
//!
//! Maps key events to [`CommandEvent`]s. Commands are stateless: they look
//! at a [`CommandContext`] snapshot and describe the change, the controller
//! applies it.
//!
//! The registry asks each command in order whether it is relevant and runs
//! the first one that is. Order matters where two commands share a key
//! (Enter inserts a newline in Headers but presses the button on Button).

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod context;
pub mod copy;
pub mod editing;
pub mod events;
pub mod method;
pub mod movement;
pub mod navigation;

pub use context::{CommandContext, FormSnapshot};
pub use events::{CommandEvent, MovementDirection};

/// A key binding
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the current state
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events for `event`
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Name used in debug logs
    fn name(&self) -> &'static str;
}

/// Ordered set of commands
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with every form binding installed
    pub fn new() -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(app::AppTerminateCommand),
            Box::new(app::EscapeQuitCommand),
            Box::new(copy::CopyShortcutCommand),
            Box::new(copy::PressButtonCommand),
            Box::new(navigation::FocusNextCommand),
            Box::new(navigation::FocusPreviousCommand),
            Box::new(navigation::AdvanceOnEnterCommand),
            Box::new(method::CycleMethodCommand),
            Box::new(editing::InsertNewLineCommand),
            Box::new(editing::InsertCharCommand),
            Box::new(editing::DeleteCharCommand),
            Box::new(movement::MoveCursorCommand),
        ];
        Self { commands }
    }

    /// Run the first relevant command. Unhandled keys produce no events.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        match self
            .commands
            .iter()
            .find(|command| command.is_relevant(context, &event))
        {
            Some(command) => {
                tracing::debug!("Dispatching {:?} to {}", event.code, command.name());
                command.execute(event, context)
            }
            None => Ok(vec![]),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) fn test_context(
    focus: crate::form::events::FormField,
    method: crate::form::models::HttpMethod,
    has_url: bool,
) -> CommandContext {
    CommandContext::new(FormSnapshot {
        focus,
        method,
        has_url,
    })
}
