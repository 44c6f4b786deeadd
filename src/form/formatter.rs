//! # Curl Command Formatter
//!
//! Turns the draft fields into a multi-line `curl` invocation.
//!
//! Header lines are wrapped in double quotes and the body in single quotes.
//! Embedded quote characters are passed through unescaped.

use crate::form::models::HttpMethod;

/// Line continuation placed between segments
const CONTINUATION: &str = " \\\n  ";

/// Trim whitespace and byte order marks, matching what browser form
/// fields consider blank. NEL (U+0085) is kept.
fn trim_field(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Header lines that will be emitted: trimmed, blank ones dropped, in
/// input order
pub fn header_lines(headers_text: &str) -> impl Iterator<Item = &str> {
    headers_text
        .split('\n')
        .map(trim_field)
        .filter(|line| !line.is_empty())
}

/// Format the curl command for the given fields.
///
/// Returns an empty string when `url` is empty. Never fails.
pub fn format_curl_command(
    method: HttpMethod,
    url: &str,
    headers_text: &str,
    body_text: &str,
) -> String {
    if url.is_empty() {
        return String::new();
    }

    let mut curl = format!("curl -X {method} \"{url}\"");

    for header in header_lines(headers_text) {
        curl.push_str(CONTINUATION);
        curl.push_str(&format!("-H \"{header}\""));
    }

    let body = trim_field(body_text);
    if method.allows_body() && !body.is_empty() {
        curl.push_str(CONTINUATION);
        curl.push_str(&format!("-d '{body}'"));
    }

    curl
}
