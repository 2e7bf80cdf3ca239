/// Line ending style for the formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EolStyle {
    /// Windows-style line endings (`\r\n`).
    Crlf,
    /// Unix-style line endings (`\n`).
    Lf,
}

/// Configuration options for the formatting engine.
///
/// JSON output always uses two-space indentation; the options here affect
/// line endings and the JavaScript renderer.
///
/// # Example
///
/// ```rust
/// use snipfmt::{EolStyle, FormatOptions};
///
/// let mut options = FormatOptions::default();
/// options.indent_spaces = 4;
/// options.eol_style = EolStyle::Lf;
/// ```
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Line ending style for the output. Default: [`EolStyle::Lf`].
    pub eol_style: EolStyle,

    /// Number of spaces per indentation level in JavaScript output.
    /// Default: 2.
    pub indent_spaces: usize,

    /// Width used when expanding tab characters in JavaScript input.
    /// Default: 4.
    pub tab_width: usize,

    /// Break single-line statement runs at braces and semicolons before
    /// indenting, so `function f(x){return x;}` gets a multi-line body.
    /// Semicolons inside parentheses (`for` headers) are left alone.
    /// Default: true.
    pub split_statements: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            eol_style: EolStyle::Lf,
            indent_spaces: 2,
            tab_width: 4,
            split_statements: true,
        }
    }
}

impl FormatOptions {
    /// Creates a new `FormatOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}
