use crate::model::FormatKind;

/// Substrings that flag input as JavaScript-like source. Containment is
/// enough; no tokenization happens here.
const JS_MARKERS: [&str; 16] = [
    "function", "const ", "let ", "var ", "=>", "console.", "return ", "if (", "for (", "while (",
    "class ", "import ", "export ", ";", "(", ")",
];

/// Decides whether a blob of text should be rendered as JSON or as
/// JavaScript. Total function; ambiguous input defaults to JavaScript.
///
/// The checks run in a fixed priority order, and that order is part of the
/// contract: a strict JSON parse is the only authoritative JSON signal,
/// the marker scan runs before the wrapped-brace check, and brace-wrapped
/// text that fails strict parsing is presumed to be a relaxed object or
/// array literal rather than JSON.
///
/// # Example
///
/// ```rust
/// use snipfmt::{classify, FormatKind};
///
/// assert_eq!(classify(r#"{"a": 1}"#), FormatKind::Json);
/// assert_eq!(classify("{a: 1}"), FormatKind::Javascript);
/// assert_eq!(classify("const x = 1;"), FormatKind::Javascript);
/// ```
pub fn classify(text: &str) -> FormatKind {
    let trimmed = text.trim();

    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return FormatKind::Json;
    }

    if JS_MARKERS.iter().any(|marker| trimmed.contains(marker)) {
        return FormatKind::Javascript;
    }

    // Wrapped in braces or brackets but not strict JSON: most likely a
    // literal with relaxed syntax (unquoted keys, trailing commas).
    if (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
    {
        return FormatKind::Javascript;
    }

    FormatKind::Javascript
}
