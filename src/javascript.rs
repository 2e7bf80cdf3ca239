//! Heuristic JavaScript re-layout.
//!
//! This is a line- and character-pattern engine, not a parser: it never
//! fails, and it does not lex strings, comments or regex literals. A brace
//! inside a string literal is treated like any other brace, so such lines
//! can come out mis-indented. That trade-off buys a formatter that degrades
//! gracefully on arbitrary pasted text instead of rejecting it.

use crate::buffer::LineBuffer;
use crate::options::FormatOptions;
use crate::tokenizer::{is_ident_continue, is_ident_start};

/// Operators that get a single surrounding space. Longest forms first, so
/// `===` is matched as one unit and never re-processed as `==` or `=`.
const OPERATORS: [&str; 16] = [
    "===", "!==", "==", "!=", "<=", ">=", "&&", "||", "=", "<", ">", "+", "-", "*", "/", "%",
];

/// Bracket nesting depth across lines. Only the first character of a line
/// may close a level and only the last may open one; brackets elsewhere in
/// a line are not tracked.
#[derive(Debug, Default)]
struct IndentState {
    depth: usize,
}

impl IndentState {
    fn open(&mut self) {
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

pub fn format_javascript(text: &str, options: &FormatOptions) -> String {
    let mut code = normalize_whitespace(text, options.tab_width);
    if options.split_statements {
        code = split_statements(&code);
    }
    let code = indent_by_nesting(&code, options.indent_spaces);
    let lines: Vec<String> = code
        .split('\n')
        .map(|line| space_keywords(&space_operators(line)))
        .collect();
    lines.join("\n")
}

fn normalize_whitespace(text: &str, tab_width: usize) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(tab_width))
}

/// Puts `{` and statement-ending `;` before a line break and `}` at a line
/// start, so the indentation pass has lines to work with. Semicolons inside
/// parentheses (`for` headers) stay put. Already-broken code passes through
/// unchanged.
fn split_statements(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 16);
    let mut paren_depth = 0usize;
    let mut chars = code.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '(' => {
                paren_depth += 1;
                out.push(ch);
            }
            ')' => {
                paren_depth = paren_depth.saturating_sub(1);
                out.push(ch);
            }
            '{' => {
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
                out.push('{');
                if matches!(chars.peek(), Some(&next) if next != '\n') {
                    out.push('\n');
                }
            }
            '}' => {
                if !at_line_start(&out) {
                    out.push('\n');
                }
                out.push('}');
            }
            ';' if paren_depth == 0 => {
                out.push(';');
                if matches!(chars.peek(), Some(&next) if next != '\n') {
                    out.push('\n');
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

fn at_line_start(out: &str) -> bool {
    out.chars().rev().take_while(|&c| c != '\n').all(|c| c == ' ')
}

fn indent_by_nesting(code: &str, indent_spaces: usize) -> String {
    let mut buffer = LineBuffer::default();
    let mut state = IndentState::default();

    for line in code.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            buffer.end_line();
            continue;
        }
        if matches!(trimmed.chars().next(), Some('}' | ')' | ']')) {
            state.close();
        }
        buffer.spaces(state.depth * indent_spaces).add(trimmed).end_line();
        if matches!(trimmed.chars().last(), Some('{' | '(' | '[')) {
            state.open();
        }
    }
    buffer.into_string()
}

/// Inserts a single space around binary operators where one is missing.
/// Guard characters on both sides keep longer operators (`===`, `=>`, `++`,
/// `+=`, `//`, ...) from being split apart, and a line that is already
/// correctly spaced comes back unchanged.
fn space_operators(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + 8);
    let mut i = 0usize;

    while i < chars.len() {
        let Some(op) = leading_operator(&chars[i..]) else {
            out.push(chars[i]);
            i += 1;
            continue;
        };
        let len = op.chars().count();
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + len).copied();

        if !wants_spacing(op, prev, next) {
            out.push_str(op);
            i += len;
            continue;
        }
        if !out.ends_with(' ') {
            out.push(' ');
        }
        out.push_str(op);
        if matches!(next, Some(c) if c != ' ') {
            out.push(' ');
        }
        i += len;
    }
    out
}

fn leading_operator(rest: &[char]) -> Option<&'static str> {
    OPERATORS
        .iter()
        .copied()
        .find(|op| op.chars().enumerate().all(|(k, c)| rest.get(k) == Some(&c)))
}

fn wants_spacing(op: &str, prev: Option<char>, next: Option<char>) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    let Some(next) = next else {
        return false;
    };
    if matches!(prev, '=' | '!' | '<' | '>') || excluded_before(op).contains(&prev) {
        return false;
    }
    !excluded_after(op).contains(&next)
}

/// Characters that, following the operator, mark it as a fragment of a
/// longer operator that must not be split (`=` before `>` is an arrow,
/// `+` before `+` an increment, and so on).
fn excluded_after(op: &str) -> &'static [char] {
    match op {
        "=" => &['=', '>'],
        "+" => &['=', '+'],
        "-" => &['=', '-'],
        "*" => &['=', '*'],
        "/" => &['=', '/'],
        "%" => &['=', '%'],
        "&&" => &['=', '&'],
        "||" => &['=', '|'],
        _ => &['='],
    }
}

/// Preceding characters with the same effect: a `=` after `+` belongs to
/// `+=`, a second `/` belongs to a comment marker.
fn excluded_before(op: &str) -> &'static [char] {
    match op {
        "=" => &['+', '-', '*', '/', '%', '&', '|'],
        "+" => &['+'],
        "-" => &['-'],
        "*" => &['*'],
        "/" => &['/'],
        "%" => &['%'],
        "&&" => &['&'],
        "||" => &['|'],
        _ => &[],
    }
}

/// Normalizes keyword spacing: one space between a control keyword and its
/// `(`, one space after `function` before a name, and one space after
/// declaration keywords when a token follows.
fn space_keywords(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + 8);
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        let at_word_start = is_ident_start(ch) && (i == 0 || !is_ident_continue(chars[i - 1]));
        if !at_word_start {
            out.push(ch);
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < chars.len() && is_ident_continue(chars[end]) {
            end += 1;
        }
        let word: String = chars[i..end].iter().collect();
        i = end;

        match word.as_str() {
            "if" | "for" | "while" | "switch" | "catch" => {
                out.push_str(&word);
                let after = skip_spaces(&chars, i);
                if chars.get(after) == Some(&'(') {
                    out.push(' ');
                    i = after;
                }
            }
            "function" => {
                out.push_str(&word);
                let name_start = skip_spaces(&chars, i);
                let mut name_end = name_start;
                while name_end < chars.len() && is_ident_continue(chars[name_end]) {
                    name_end += 1;
                }
                let paren = skip_spaces(&chars, name_end);
                if name_start > i && name_end > name_start && chars.get(paren) == Some(&'(') {
                    out.push(' ');
                    out.extend(&chars[name_start..name_end]);
                    i = paren;
                }
            }
            "return" | "const" | "let" | "var" | "class" => {
                out.push_str(&word);
                let after = skip_spaces(&chars, i);
                if after > i && after < chars.len() {
                    out.push(' ');
                    i = after;
                }
            }
            _ => out.push_str(&word),
        }
    }
    out
}

fn skip_spaces(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    i
}
