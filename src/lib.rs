//! # snipfmt
//!
//! An auto-detecting formatter for pasted code snippets. Given a blob of
//! text believed to be either JSON or JavaScript-like source, snipfmt
//! decides which it is and produces a normalized, indented rendition:
//!
//! - JSON is parsed for real and re-serialized canonically (two-space
//!   indent, one element per line, key order preserved). Input that is
//!   almost JSON — unquoted keys, single-quoted strings, trailing commas —
//!   is accepted through a permissive literal-only parser and normalized
//!   to strict JSON.
//! - JavaScript is re-laid out heuristically: statements split onto their
//!   own lines, indentation rebuilt from bracket nesting, and spacing
//!   normalized around operators and keywords. This path is deliberately
//!   not a parser; it degrades gracefully on arbitrary text and never
//!   fails.
//!
//! ## Command-Line Tool
//!
//! The crate ships the `snipfmt` CLI for formatting from the terminal:
//!
//! ```sh
//! # Format whatever the clipboard paste turned out to be
//! echo '{"a":1,"b":[1,2,3]}' | snipfmt
//!
//! # Force a renderer instead of auto-detecting
//! snipfmt --kind json snippet.txt
//! ```
//!
//! Run `snipfmt --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use snipfmt::{FormatKind, Formatter};
//!
//! let formatter = Formatter::new();
//!
//! let result = formatter.format(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//! assert_eq!(result.kind, FormatKind::Json);
//! assert!(result.code.contains("\"name\": \"Alice\""));
//!
//! let result = formatter.format("function add(a,b){return a+b;}").unwrap();
//! assert_eq!(result.kind, FormatKind::Javascript);
//! assert_eq!(result.code, "function add(a,b) {\n  return a + b;\n}");
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be canonicalized
//! directly:
//!
//! ```rust
//! use serde::Serialize;
//! use snipfmt::Formatter;
//!
//! #[derive(Serialize)]
//! struct Config {
//!     retries: u32,
//!     verbose: bool,
//! }
//!
//! let output = Formatter::new()
//!     .serialize(&Config { retries: 3, verbose: true })
//!     .unwrap();
//! assert_eq!(output, "{\n  \"retries\": 3,\n  \"verbose\": true\n}");
//! ```
//!
//! ## Configuration
//!
//! Behavior is adjusted through [`FormatOptions`]:
//!
//! ```rust
//! use snipfmt::{EolStyle, Formatter};
//!
//! let mut formatter = Formatter::new();
//! formatter.options.indent_spaces = 4;
//! formatter.options.eol_style = EolStyle::Crlf;
//! formatter.options.split_statements = false;
//! ```

mod buffer;
mod classifier;
mod error;
mod formatter;
mod javascript;
mod json;
mod model;
mod options;
mod parser;
mod tokenizer;

pub use crate::classifier::classify;
pub use crate::error::FormatError;
pub use crate::formatter::Formatter;
pub use crate::model::{FormatKind, FormattedCode, InputPosition};
pub use crate::options::{EolStyle, FormatOptions};
