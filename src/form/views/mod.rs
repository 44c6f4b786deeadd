//! # View Layer
//!
//! Layout is computed from the view model, then drawn by the renderer.

pub mod layout;
pub mod terminal_renderer;

pub use layout::{build_layout, LineStyle, ScreenLayout, ScreenLine};
pub use terminal_renderer::TerminalRenderer;
