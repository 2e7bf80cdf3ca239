//! Recursive-descent parser for the permissive literal grammar: JSON plus
//! unquoted identifier keys, single-quoted strings, and trailing commas.
//! Values are still literals only; identifiers other than `true`, `false`
//! and `null` are rejected, so no expression ever gets evaluated.

use serde_json::{Map, Number, Value};

use crate::error::FormatError;
use crate::model::{InputPosition, Token, TokenType};
use crate::tokenizer::TokenGenerator;

pub struct TokenEnumerator<I>
where
    I: Iterator<Item = Result<Token, FormatError>>,
{
    generator: I,
    current: Option<Token>,
}

impl<I> TokenEnumerator<I>
where
    I: Iterator<Item = Result<Token, FormatError>>,
{
    pub fn new(generator: I) -> Self {
        Self { generator, current: None }
    }

    pub fn current(&self) -> Result<&Token, FormatError> {
        self.current
            .as_ref()
            .ok_or_else(|| FormatError::invalid_json("Illegal enumerator usage", None))
    }

    pub fn move_next(&mut self) -> Result<bool, FormatError> {
        match self.generator.next() {
            None => {
                self.current = None;
                Ok(false)
            }
            Some(Ok(token)) => {
                self.current = Some(token);
                Ok(true)
            }
            Some(Err(err)) => Err(err),
        }
    }
}

/// Parses `text` as a single permissive literal value.
pub fn parse_literal(text: &str) -> Result<Value, FormatError> {
    let mut tokens = TokenEnumerator::new(TokenGenerator::new(text));
    if !tokens.move_next()? {
        return Err(FormatError::invalid_json("No value found in input", None));
    }
    let value = parse_value(&mut tokens)?;
    if tokens.move_next()? {
        let pos = tokens.current()?.input_position;
        return Err(FormatError::invalid_json(
            "Unexpected content after the top level value",
            Some(pos),
        ));
    }
    Ok(value)
}

fn parse_value<I>(tokens: &mut TokenEnumerator<I>) -> Result<Value, FormatError>
where
    I: Iterator<Item = Result<Token, FormatError>>,
{
    let token = tokens.current()?.clone();
    match token.token_type {
        TokenType::BeginArray => parse_array(tokens),
        TokenType::BeginObject => parse_object(tokens),
        TokenType::String => Ok(Value::String(decode_string(&token)?)),
        TokenType::Number => Ok(Value::Number(decode_number(&token)?)),
        TokenType::Word => match token.text.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            other => Err(FormatError::invalid_json(
                format!("Unexpected identifier '{}'", other),
                Some(token.input_position),
            )),
        },
        _ => Err(FormatError::invalid_json(
            "Unexpected token",
            Some(token.input_position),
        )),
    }
}

fn parse_array<I>(tokens: &mut TokenEnumerator<I>) -> Result<Value, FormatError>
where
    I: Iterator<Item = Result<Token, FormatError>>,
{
    let start = tokens.current()?.input_position;
    let mut elements: Vec<Value> = Vec::new();
    let mut comma_status = CommaStatus::EmptyCollection;

    loop {
        let token = next_or_fail(tokens, start)?;
        match token.token_type {
            // Trailing commas are part of the grammar, so no check here.
            TokenType::EndArray => return Ok(Value::Array(elements)),
            TokenType::Comma => {
                if comma_status != CommaStatus::ElementSeen {
                    return Err(FormatError::invalid_json(
                        "Unexpected comma in array",
                        Some(token.input_position),
                    ));
                }
                comma_status = CommaStatus::CommaSeen;
            }
            _ => {
                if comma_status == CommaStatus::ElementSeen {
                    return Err(FormatError::invalid_json(
                        "Comma missing between array elements",
                        Some(token.input_position),
                    ));
                }
                elements.push(parse_value(tokens)?);
                comma_status = CommaStatus::ElementSeen;
            }
        }
    }
}

fn parse_object<I>(tokens: &mut TokenEnumerator<I>) -> Result<Value, FormatError>
where
    I: Iterator<Item = Result<Token, FormatError>>,
{
    let start = tokens.current()?.input_position;
    let mut map = Map::new();
    let mut pending_name: Option<String> = None;
    let mut phase = ObjectPhase::BeforePropName;

    loop {
        let token = next_or_fail(tokens, start)?;
        match token.token_type {
            TokenType::EndObject => {
                if matches!(phase, ObjectPhase::AfterPropName | ObjectPhase::AfterColon) {
                    return Err(FormatError::invalid_json(
                        "Unexpected end of object",
                        Some(token.input_position),
                    ));
                }
                return Ok(Value::Object(map));
            }
            TokenType::Colon => {
                if phase != ObjectPhase::AfterPropName {
                    return Err(FormatError::invalid_json(
                        "Unexpected colon in object",
                        Some(token.input_position),
                    ));
                }
                phase = ObjectPhase::AfterColon;
            }
            TokenType::Comma => {
                if phase != ObjectPhase::AfterPropValue {
                    return Err(FormatError::invalid_json(
                        "Unexpected comma in object",
                        Some(token.input_position),
                    ));
                }
                phase = ObjectPhase::AfterComma;
            }
            TokenType::String | TokenType::Word
                if matches!(phase, ObjectPhase::BeforePropName | ObjectPhase::AfterComma) =>
            {
                let name = if token.token_type == TokenType::String {
                    decode_string(&token)?
                } else {
                    token.text.clone()
                };
                pending_name = Some(name);
                phase = ObjectPhase::AfterPropName;
            }
            _ => {
                if phase != ObjectPhase::AfterColon {
                    return Err(FormatError::invalid_json(
                        "Unexpected token in object",
                        Some(token.input_position),
                    ));
                }
                let value = parse_value(tokens)?;
                let Some(name) = pending_name.take() else {
                    return Err(FormatError::invalid_json(
                        "Parser logic error",
                        Some(token.input_position),
                    ));
                };
                // Last value wins; the key keeps its first position.
                map.insert(name, value);
                phase = ObjectPhase::AfterPropValue;
            }
        }
    }
}

fn next_or_fail<I>(
    tokens: &mut TokenEnumerator<I>,
    start: InputPosition,
) -> Result<Token, FormatError>
where
    I: Iterator<Item = Result<Token, FormatError>>,
{
    if !tokens.move_next()? {
        return Err(FormatError::invalid_json(
            "Unexpected end of input while reading a container opened",
            Some(start),
        ));
    }
    Ok(tokens.current()?.clone())
}

fn decode_string(token: &Token) -> Result<String, FormatError> {
    let quoted = if token.text.starts_with('\'') {
        requote_single_quoted(&token.text)
    } else {
        token.text.clone()
    };
    serde_json::from_str::<String>(&quoted).map_err(|err| {
        FormatError::invalid_json(
            format!("Malformed string: {}", err),
            Some(token.input_position),
        )
    })
}

fn decode_number(token: &Token) -> Result<Number, FormatError> {
    serde_json::from_str::<Number>(&token.text).map_err(|_| {
        FormatError::invalid_json(
            format!("Malformed number '{}'", token.text),
            Some(token.input_position),
        )
    })
}

/// Rewrites a single-quoted string token into its double-quoted JSON
/// equivalent: `\'` loses its backslash, bare `"` gains one, everything
/// else passes through untouched.
fn requote_single_quoted(text: &str) -> String {
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => {}
            },
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommaStatus {
    EmptyCollection,
    ElementSeen,
    CommaSeen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectPhase {
    BeforePropName,
    AfterPropName,
    AfterColon,
    AfterPropValue,
    AfterComma,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_json_still_parses() {
        let value = parse_literal(r#"{"a": 1, "b": [true, null]}"#).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [true, null]}));
    }

    #[test]
    fn unquoted_keys_and_trailing_commas() {
        let value = parse_literal("{a:1, b:2,}").unwrap();
        assert_eq!(value, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn single_quoted_strings_decode() {
        let value = parse_literal("{'q': 'it\\'s \"fine\"'}").unwrap();
        assert_eq!(value, json!({"q": "it's \"fine\""}));
    }

    #[test]
    fn trailing_comma_in_array() {
        let value = parse_literal("[1, 2, 3,]").unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn key_order_is_preserved() {
        let value = parse_literal("{z:1, a:2, m:3}").unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let value = parse_literal("{a:1, b:2, a:3}").unwrap();
        assert_eq!(value, json!({"a": 3, "b": 2}));
    }

    #[test]
    fn identifiers_are_not_values() {
        assert!(parse_literal("{a: undefined}").is_err());
        assert!(parse_literal("foo").is_err());
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = parse_literal(r#"{"a": }"#).unwrap_err();
        assert!(matches!(err, FormatError::InvalidJson { .. }));
    }

    #[test]
    fn trailing_content_is_rejected() {
        assert!(parse_literal("{a:1} {b:2}").is_err());
    }

    #[test]
    fn lone_comma_is_rejected() {
        assert!(parse_literal("[,1]").is_err());
        assert!(parse_literal("{,a:1}").is_err());
    }
}
