//! Best-effort extraction of the `category` value from a result blob.
//!
//! The blob looks like a single-quoted dict repr or a JSON object but is not
//! guaranteed to be valid in either syntax, so it is scanned rather than
//! parsed. Accepted grammar:
//!
//! ```text
//! candidate := QUOTE "category" QUOTE WS* ":" WS* value
//! value     := "'" (ESC | [^'\\])* "'" | '"' (ESC | [^"\\])* '"'
//! ESC       := "\\" ANY
//! ```
//!
//! Candidates that start inside another quoted string lose to any candidate
//! outside one. Among the rest, the shallowest `{`/`[` nesting wins and ties
//! go to the earliest. Unquoted values (`None`, `null`, numbers), blank
//! values and unterminated quotes produce no candidate.

use std::sync::LazyLock;

use regex::Regex;

static CATEGORY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:'category'|"category")\s*:\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")"#,
    )
    .expect("category pattern is valid")
});

/// Extracts the `category` value from a loosely structured blob.
///
/// Returns `None` when no usable value is found; never fails. If every
/// candidate appears to sit inside a string (typically because of a stray
/// apostrophe in free text), the first non-blank match is used instead.
pub fn extract_category(blob: &str) -> Option<String> {
    let mut best: Option<(usize, String)> = None;
    let mut first_match: Option<String> = None;
    let mut pos = 0;
    while let Some(captures) = CATEGORY_PAIR.captures_at(blob, pos) {
        let Some(whole) = captures.get(0) else {
            break;
        };
        let value = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|raw| unescape(raw.as_str()).trim().to_string())
            .filter(|value| !value.is_empty());

        match depth_at(blob, whole.start()) {
            Some(depth) => {
                pos = whole.end();
                if let Some(value) = value
                    && best.as_ref().is_none_or(|(best_depth, _)| depth < *best_depth)
                {
                    best = Some((depth, value));
                }
            }
            None => {
                // The rejected match may have swallowed the quote of a real
                // key, so resume right after its opening quote.
                pos = whole.start() + 1;
                if first_match.is_none() {
                    first_match = value;
                }
            }
        }
    }
    best.map(|(_, value)| value).or(first_match)
}

/// Bracket depth at byte offset `end`, or `None` if `end` falls inside a
/// quoted string.
fn depth_at(blob: &str, end: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for ch in blob[..end].chars() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '{' | '[' => depth += 1,
            '}' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    if quote.is_some() { None } else { Some(depth) }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
