use std::fmt::{self, Display};

/// The renderer chosen for a piece of input text.
///
/// Produced by [`classify`](crate::classify) and carried on
/// [`FormattedCode`] so callers can key syntax highlighting off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// The input round-trips through a strict JSON parser.
    Json,
    /// Everything else: JavaScript-like source, relaxed object literals,
    /// or text we have no better answer for.
    Javascript,
}

impl FormatKind {
    /// Stable lowercase name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Json => "json",
            FormatKind::Javascript => "javascript",
        }
    }
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful output of a formatting run: the reformatted text plus the
/// renderer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCode {
    pub code: String,
    pub kind: FormatKind,
}

/// A position within the input text.
///
/// Used to report the location of parse failures. All values are
/// zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    /// Character offset from the start of the input.
    pub index: usize,
    /// Line number (first line is 0).
    pub row: usize,
    /// Column within the line.
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Colon,
    Comma,
    String,
    Number,
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub text: String,
    pub input_position: InputPosition,
}
