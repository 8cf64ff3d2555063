//! Detection of inline `$name` tag references in chat messages.

use std::sync::LazyLock;

use regex::Regex;

// The regex crate has no backreferences, so each fence width is its own branch.
static CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```.*?.```|``.*?.``|`.*?.`").expect("valid code regex")
});
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>.*$").expect("valid quote regex"));
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\S+)\b").expect("valid tag regex"));

/// Returns the first tag name referenced as `$name` outside code and quotes.
pub fn extract_inline_tag(content: &str) -> Option<String> {
    if !content.contains('$') {
        return None;
    }

    let stripped = CODE.replace_all(content, "");
    let stripped = QUOTE.replace_all(&stripped, "");
    if stripped.trim().is_empty() {
        return None;
    }

    TAG.captures(&stripped)
        .map(|caps| caps[1].to_string())
        .filter(|name| !name.is_empty())
}
