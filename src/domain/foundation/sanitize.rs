//! Free-text input sanitization.
//!
//! Everything a user types (scenario text, chat queries, login details)
//! passes through [`sanitize_input`] before it reaches a prompt or storage.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default maximum length, in characters, of sanitized input.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 4000;

/// A `<` up to and including the next `>`, or to end of text when unclosed.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"));

/// Strips tag-like substrings, trims, and truncates to `max_length` chars.
///
/// The result never contains `<`, never starts or ends with whitespace and
/// is at most `max_length` characters long, so sanitizing twice yields the
/// same text as sanitizing once.
pub fn sanitize_input(text: &str, max_length: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = TAG_PATTERN.replace_all(text, "");
    let truncated: String = stripped.trim().chars().take(max_length).collect();

    // Truncation can expose whitespace that was interior before.
    truncated.trim_end().to_string()
}
