//! HTML escaping for head tags and embedded JSON-LD.
//!
//! - `escape()`, `escape_attr()` - entity escaping for text and attributes
//! - `escape_script_json()` - keeps serialized JSON inside `<script>` inert

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Characters that could close or confuse a `<script>` raw-text block.
const SCRIPT_CHARS: [char; 3] = ['<', '>', '&'];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// JSON unicode escape for characters inside a script block.
#[inline]
fn script_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("\\u003c"),
        '>' => Some("\\u003e"),
        '&' => Some("\\u0026"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<b>"), "&lt;b&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    replace_with(s, &ESCAPE_CHARS, escape_char)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    replace_with(s, &ESCAPE_CHARS, escape_char)
}

/// Escape serialized JSON for embedding in `<script type="application/ld+json">`.
///
/// The replacements are JSON string escapes, so the payload still parses
/// to the same value while `</script>` can never appear literally.
#[inline]
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    replace_with(json, &SCRIPT_CHARS, script_char)
}

fn replace_with<'a>(
    s: &'a str,
    chars: &[char],
    entity: fn(char) -> Option<&'static str>,
) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match entity(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
