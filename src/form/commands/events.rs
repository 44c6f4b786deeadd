//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the view model.

/// Cursor movement inside a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Move focus to the next visible field
    FocusNextRequested,

    /// Move focus to the previous visible field
    FocusPreviousRequested,

    /// Step the method selector forward or backward
    MethodCycleRequested { forward: bool },

    /// Insert text at the cursor of the focused field
    TextInsertRequested { text: String },

    /// Delete one char before (`Left`) or under (`Right`) the cursor
    TextDeleteRequested { direction: MovementDirection },

    /// Move the cursor of the focused field
    CursorMoveRequested { direction: MovementDirection },

    /// Copy the formatted command to the clipboard
    CopyRequested,

    /// Request application quit
    QuitRequested,
}

impl CommandEvent {
    pub fn text_insert(text: impl Into<String>) -> Self {
        Self::TextInsertRequested { text: text.into() }
    }

    pub fn cursor_move(direction: MovementDirection) -> Self {
        Self::CursorMoveRequested { direction }
    }
}
