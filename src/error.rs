use std::fmt::{self, Display};

use crate::model::InputPosition;

/// Error type for formatting operations.
///
/// The JavaScript renderer never fails; only the JSON path and the
/// empty-input check produce errors.
#[derive(Debug, Clone)]
pub enum FormatError {
    /// The input was empty or contained only whitespace.
    EmptyInput,
    /// The input was rendered as JSON but could not be parsed, even with
    /// the permissive literal grammar. The message carries the underlying
    /// parse diagnostic.
    InvalidJson { message: String },
}

impl FormatError {
    pub fn invalid_json(message: impl Into<String>, pos: Option<InputPosition>) -> Self {
        let message = message.into();
        let message = if let Some(p) = pos {
            format!("{} at idx={}, row={}, col={}", message, p.index, p.row, p.column)
        } else {
            message
        };
        Self::InvalidJson { message }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::EmptyInput => f.write_str("nothing to format: input is empty"),
            FormatError::InvalidJson { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for FormatError {}
