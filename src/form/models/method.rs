//! # HTTP Method Model
//!
//! The fixed set of verbs the form offers. Any other token is rejected at
//! parse time, so a draft can never hold an unknown method.

use std::fmt;
use std::str::FromStr;

/// HTTP method offered by the method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// All methods in selector order
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Whether a `-d` body is emitted for this method
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|m| m == self)
            .unwrap_or_default()
    }

    /// Next method in selector order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous method in selector order, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not one of the supported methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParseError {
    token: String,
}

impl MethodParseError {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for MethodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported HTTP method '{}' (expected one of GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS)",
            self.token
        )
    }
}

impl std::error::Error for MethodParseError {}

impl FromStr for HttpMethod {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| MethodParseError {
                token: token.to_string(),
            })
    }
}
