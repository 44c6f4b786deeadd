//! # curlform - Terminal curl Command Generator
//!
//! Fill in a method, URL, headers and body, and get the equivalent `curl`
//! invocation to copy.
//!
//! ```
//! use curlform::{format_curl_command, HttpMethod};
//!
//! let command = format_curl_command(
//!     HttpMethod::Post,
//!     "https://x.com",
//!     "Content-Type: application/json",
//!     "{\"a\":1}",
//! );
//! assert_eq!(
//!     command,
//!     "curl -X POST \"https://x.com\" \\\n  -H \"Content-Type: application/json\" \\\n  -d '{\"a\":1}'"
//! );
//! ```

pub mod cmd_args;
pub mod config;
pub mod form;
pub mod print_mode;

// Re-export main types for easy access
pub use form::{format_curl_command, AppController, HttpMethod, MethodParseError, RequestDraft};
