//! # Core Form Types
//!
//! Types shared by commands, the view model and the renderer.

/// Logical position inside a text field (line and column, in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalPosition {
    pub line: usize,
    pub column: usize,
}

impl LogicalPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }
}

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Method,
    Url,
    Headers,
    Body,
    Button,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Method,
        FormField::Url,
        FormField::Headers,
        FormField::Body,
        FormField::Button,
    ];

    /// Whether the field accepts typed text
    pub fn is_text_input(&self) -> bool {
        matches!(self, FormField::Url | FormField::Headers | FormField::Body)
    }

    /// Whether Enter inserts a newline instead of moving on
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Headers | FormField::Body)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Method => "Request Method",
            FormField::Url => "URL",
            FormField::Headers => "Headers (one per line)",
            FormField::Body => "Request Body",
            FormField::Button => "Generate Curl",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Url => "https://api.example.com/endpoint",
            FormField::Headers => "Content-Type: application/json\nAuthorization: Bearer token",
            FormField::Body => "{\n  \"key\": \"value\"\n}",
            FormField::Method | FormField::Button => "",
        }
    }
}
