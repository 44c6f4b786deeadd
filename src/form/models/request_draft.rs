//! # Request Draft Model
//!
//! The unsaved form values: method, URL, header lines and body text.

use crate::form::formatter::format_curl_command;
use crate::form::models::HttpMethod;

/// In-memory draft of the request being described
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    method: HttpMethod,
    url: String,
    headers_text: String,
    body_text: String,
}

impl RequestDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn set_method(&mut self, method: HttpMethod) {
        self.method = method;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    /// Raw header text, one `Name: Value` entry per line
    pub fn headers_text(&self) -> &str {
        &self.headers_text
    }

    pub fn set_headers_text(&mut self, headers_text: String) {
        self.headers_text = headers_text;
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// Body text is kept even when the current method has no body, so
    /// switching back to POST restores it.
    pub fn set_body_text(&mut self, body_text: String) {
        self.body_text = body_text;
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    /// Formatted curl command, or an empty string when no URL is set
    pub fn to_curl_command(&self) -> String {
        format_curl_command(
            self.method,
            &self.url,
            &self.headers_text,
            &self.body_text,
        )
    }
}
