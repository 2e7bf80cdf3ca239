use crate::classifier;
use crate::error::FormatError;
use crate::javascript;
use crate::json;
use crate::model::{FormatKind, FormattedCode};
use crate::options::{EolStyle, FormatOptions};

/// The main entry point: classifies input text and dispatches it to the
/// JSON canonicalizer or the JavaScript heuristic formatter.
///
/// A `Formatter` holds no state besides its [`options`](Self::options);
/// every call is a pure function of the input text.
///
/// # Example
///
/// ```rust
/// use snipfmt::{FormatKind, Formatter};
///
/// let formatter = Formatter::new();
/// let result = formatter.format(r#"{"a":1}"#).unwrap();
///
/// assert_eq!(result.kind, FormatKind::Json);
/// assert_eq!(result.code, "{\n  \"a\": 1\n}");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    pub options: FormatOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self { options: FormatOptions::default() }
    }

    /// Formats `text`, deciding the renderer automatically.
    ///
    /// Empty or whitespace-only input fails with
    /// [`FormatError::EmptyInput`]; input that classifies as JSON but
    /// cannot be parsed even permissively fails with
    /// [`FormatError::InvalidJson`]. The JavaScript renderer never fails.
    pub fn format(&self, text: &str) -> Result<FormattedCode, FormatError> {
        if text.trim().is_empty() {
            return Err(FormatError::EmptyInput);
        }
        self.render(text, classifier::classify(text))
    }

    /// Formats `text` with an explicitly chosen renderer, skipping
    /// classification. A JSON parse failure is reported as-is; there is no
    /// fallback to the JavaScript renderer once JSON was requested.
    pub fn format_as(&self, text: &str, kind: FormatKind) -> Result<FormattedCode, FormatError> {
        if text.trim().is_empty() {
            return Err(FormatError::EmptyInput);
        }
        self.render(text, kind)
    }

    /// Renders `text` as JSON (strict first, then the permissive literal
    /// grammar) with canonical two-space indentation.
    pub fn format_json(&self, text: &str) -> Result<String, FormatError> {
        Ok(self.apply_eol(json::format_json(text)?))
    }

    /// Re-lays out `text` as JavaScript. Best-effort; never fails.
    pub fn format_javascript(&self, text: &str) -> String {
        self.apply_eol(javascript::format_javascript(text, &self.options))
    }

    /// Canonicalizes any serializable value directly, without going
    /// through text parsing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use snipfmt::Formatter;
    ///
    /// #[derive(Serialize)]
    /// struct Player {
    ///     name: String,
    ///     scores: Vec<i32>,
    /// }
    ///
    /// let player = Player { name: "Alice".into(), scores: vec![95, 87] };
    /// let output = Formatter::new().serialize(&player).unwrap();
    /// assert!(output.contains("\"name\": \"Alice\""));
    /// ```
    pub fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String, FormatError> {
        let value = serde_json::to_value(value)
            .map_err(|err| FormatError::invalid_json(err.to_string(), None))?;
        Ok(self.apply_eol(json::canonical_string(&value)?))
    }

    fn render(&self, text: &str, kind: FormatKind) -> Result<FormattedCode, FormatError> {
        let code = match kind {
            FormatKind::Json => json::format_json(text)?,
            FormatKind::Javascript => javascript::format_javascript(text, &self.options),
        };
        Ok(FormattedCode { code: self.apply_eol(code), kind })
    }

    fn apply_eol(&self, code: String) -> String {
        match self.options.eol_style {
            EolStyle::Lf => code,
            EolStyle::Crlf => code.replace('\n', "\r\n"),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let formatter = Formatter::new();
        assert!(matches!(formatter.format(""), Err(FormatError::EmptyInput)));
        assert!(matches!(formatter.format("   \n\t"), Err(FormatError::EmptyInput)));
    }

    #[test]
    fn output_carries_the_kind_used() {
        let formatter = Formatter::new();
        assert_eq!(formatter.format(r#"[1,2]"#).unwrap().kind, FormatKind::Json);
        assert_eq!(formatter.format("let x = 1;").unwrap().kind, FormatKind::Javascript);
    }

    #[test]
    fn forced_json_does_not_fall_back_to_javascript() {
        let formatter = Formatter::new();
        let err = formatter.format_as("function f() {}", FormatKind::Json).unwrap_err();
        assert!(matches!(err, FormatError::InvalidJson { .. }));
    }

    #[test]
    fn forced_javascript_accepts_valid_json() {
        let formatter = Formatter::new();
        let result = formatter.format_as(r#"{"a":1}"#, FormatKind::Javascript).unwrap();
        assert_eq!(result.kind, FormatKind::Javascript);
    }

    #[test]
    fn crlf_output_style() {
        let mut formatter = Formatter::new();
        formatter.options.eol_style = EolStyle::Crlf;
        let result = formatter.format(r#"{"a":1}"#).unwrap();
        assert_eq!(result.code, "{\r\n  \"a\": 1\r\n}");
    }
}
