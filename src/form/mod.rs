//! # Interactive Form
//!
//! The curl form split along MVVM lines:
//!
//! ```text
//! ┌──────────────┐  KeyEvent  ┌──────────────┐ CommandEvent ┌───────────────┐
//! │ EventStream  │───────────▶│ Controller   │─────────────▶│ FormViewModel │
//! └──────────────┘            │ + Registry   │              │ + RequestDraft│
//!                             └──────┬───────┘              └───────┬───────┘
//!                                    │ render_full                  │ copy
//!                                    ▼                              ▼
//!                             ┌──────────────┐              ┌───────────────┐
//!                             │ Renderer     │              │ CopyService   │
//!                             └──────────────┘              └───────────────┘
//! ```
//!
//! [`formatter`] holds the only real logic and depends on nothing else here.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod formatter;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

pub use controllers::AppController;
pub use formatter::format_curl_command;
pub use models::{HttpMethod, MethodParseError, RequestDraft};
