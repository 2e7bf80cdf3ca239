use crate::error::FormatError;
use crate::model::{InputPosition, Token, TokenType};

const MAX_DOC_SIZE: usize = 2_000_000_000;

pub struct ScannerState {
    original_text: String,
    chars: Vec<char>,
    byte_indices: Vec<usize>,
    pub current_position: InputPosition,
    pub token_position: InputPosition,
}

impl ScannerState {
    pub fn new(original_text: &str) -> Self {
        let mut chars: Vec<char> = Vec::new();
        let mut byte_indices: Vec<usize> = Vec::new();
        for (idx, ch) in original_text.char_indices() {
            byte_indices.push(idx);
            chars.push(ch);
        }
        byte_indices.push(original_text.len());

        Self {
            original_text: original_text.to_string(),
            chars,
            byte_indices,
            current_position: InputPosition { index: 0, row: 0, column: 0 },
            token_position: InputPosition { index: 0, row: 0, column: 0 },
        }
    }

    pub fn advance(&mut self) {
        if self.current_position.index >= MAX_DOC_SIZE {
            panic!("Maximum document length exceeded");
        }
        self.current_position.index += 1;
        self.current_position.column += 1;
    }

    pub fn new_line(&mut self) {
        if self.current_position.index >= MAX_DOC_SIZE {
            panic!("Maximum document length exceeded");
        }
        self.current_position.index += 1;
        self.current_position.row += 1;
        self.current_position.column = 0;
    }

    pub fn set_token_start(&mut self) {
        self.token_position = self.current_position;
    }

    pub fn token_from_span(&self, token_type: TokenType) -> Token {
        let start = self.byte_indices[self.token_position.index];
        let end = self.byte_indices[self.current_position.index];
        Token {
            token_type,
            text: self.original_text[start..end].to_string(),
            input_position: self.token_position,
        }
    }

    pub fn make_token(&self, token_type: TokenType, text: &str) -> Token {
        Token {
            token_type,
            text: text.to_string(),
            input_position: self.token_position,
        }
    }

    pub fn current(&self) -> Option<char> {
        if self.at_end() {
            None
        } else {
            Some(self.chars[self.current_position.index])
        }
    }

    pub fn at_end(&self) -> bool {
        self.current_position.index >= self.chars.len()
    }

    pub fn error(&self, message: &str) -> FormatError {
        FormatError::invalid_json(message, Some(self.current_position))
    }
}

/// Scanner for the permissive literal grammar: strict JSON punctuation and
/// values, plus single-quoted strings and bare identifier words. Comments
/// are not part of the grammar and fail as unexpected characters.
pub struct TokenGenerator {
    state: ScannerState,
}

impl TokenGenerator {
    pub fn new(input: &str) -> Self {
        Self { state: ScannerState::new(input) }
    }
}

impl Iterator for TokenGenerator {
    type Item = Result<Token, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.state.current()?;
            match ch {
                ' ' | '\t' | '\r' => self.state.advance(),
                '\n' => self.state.new_line(),
                '{' => return Some(scan_single_char(&mut self.state, "{", TokenType::BeginObject)),
                '}' => return Some(scan_single_char(&mut self.state, "}", TokenType::EndObject)),
                '[' => return Some(scan_single_char(&mut self.state, "[", TokenType::BeginArray)),
                ']' => return Some(scan_single_char(&mut self.state, "]", TokenType::EndArray)),
                ':' => return Some(scan_single_char(&mut self.state, ":", TokenType::Colon)),
                ',' => return Some(scan_single_char(&mut self.state, ",", TokenType::Comma)),
                '"' | '\'' => return Some(scan_string(&mut self.state, ch)),
                '-' => return Some(scan_number(&mut self.state)),
                _ if ch.is_ascii_digit() => return Some(scan_number(&mut self.state)),
                _ if is_ident_start(ch) => return Some(Ok(scan_word(&mut self.state))),
                _ => return Some(Err(self.state.error("Unexpected character"))),
            }
        }
    }
}

fn scan_single_char(
    state: &mut ScannerState,
    symbol: &str,
    token_type: TokenType,
) -> Result<Token, FormatError> {
    state.set_token_start();
    let token = state.make_token(token_type, symbol);
    state.advance();
    Ok(token)
}

fn scan_word(state: &mut ScannerState) -> Token {
    state.set_token_start();
    state.advance();
    while matches!(state.current(), Some(c) if is_ident_continue(c)) {
        state.advance();
    }
    state.token_from_span(TokenType::Word)
}

fn scan_string(state: &mut ScannerState, quote: char) -> Result<Token, FormatError> {
    state.set_token_start();
    state.advance();

    let mut escape_pending = false;
    let mut expected_hex = 0usize;
    loop {
        let Some(ch) = state.current() else {
            return Err(state.error("Unexpected end of input while reading string"));
        };

        if expected_hex > 0 {
            if !ch.is_ascii_hexdigit() {
                return Err(state.error("Bad unicode escape in string"));
            }
            expected_hex -= 1;
            state.advance();
            continue;
        }

        if escape_pending {
            if !is_legal_after_backslash(ch, quote) {
                return Err(state.error("Bad escaped character in string"));
            }
            if ch == 'u' {
                expected_hex = 4;
            }
            escape_pending = false;
            state.advance();
            continue;
        }

        if is_control(ch) {
            return Err(state.error("Control characters are not allowed in strings"));
        }

        state.advance();
        if ch == quote {
            return Ok(state.token_from_span(TokenType::String));
        }
        if ch == '\\' {
            escape_pending = true;
        }
    }
}

fn scan_number(state: &mut ScannerState) -> Result<Token, FormatError> {
    state.set_token_start();
    if state.current() == Some('-') {
        state.advance();
    }

    // Integer part: a lone zero or a nonzero digit run, as in JSON.
    match state.current() {
        Some('0') => state.advance(),
        Some(c) if c.is_ascii_digit() => {
            while matches!(state.current(), Some(c) if c.is_ascii_digit()) {
                state.advance();
            }
        }
        _ => return Err(state.error("Digit expected in number")),
    }

    if state.current() == Some('.') {
        state.advance();
        if !matches!(state.current(), Some(c) if c.is_ascii_digit()) {
            return Err(state.error("Digit expected after decimal point"));
        }
        while matches!(state.current(), Some(c) if c.is_ascii_digit()) {
            state.advance();
        }
    }

    if matches!(state.current(), Some('e' | 'E')) {
        state.advance();
        if matches!(state.current(), Some('+' | '-')) {
            state.advance();
        }
        if !matches!(state.current(), Some(c) if c.is_ascii_digit()) {
            return Err(state.error("Digit expected in exponent"));
        }
        while matches!(state.current(), Some(c) if c.is_ascii_digit()) {
            state.advance();
        }
    }

    Ok(state.token_from_span(TokenType::Number))
}

pub(crate) fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

pub(crate) fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

fn is_legal_after_backslash(ch: char, quote: char) -> bool {
    matches!(ch, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u') || ch == quote
}

fn is_control(ch: char) -> bool {
    let code = ch as u32;
    (code <= 0x1F) || (code == 0x7F) || (code >= 0x80 && code <= 0x9F)
}
