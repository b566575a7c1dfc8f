//! Cleaning raw model replies for display.

use regex::Regex;
use std::sync::OnceLock;

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

// Matches a reply that is nothing but a single fenced markdown block.
fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| {
        Regex::new(r"^```[a-zA-Z0-9_-]*\r?\n?([\s\S]*?)\r?\n?```$").expect("fence regex")
    })
}

/// Cleans a raw model reply for display.
///
/// Pure and total: trims surrounding whitespace and, when the entire reply
/// is wrapped in one fenced markdown block, unwraps it. Anything else is
/// returned as-is.
pub fn clean_response(raw: &str) -> String {
    let trimmed = raw.trim();
    fence_re()
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
