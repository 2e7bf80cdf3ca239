use serde::Serialize;
use snipfmt::{classify, FormatError, FormatKind, Formatter};

#[test]
fn compact_json_expands_to_canonical_layout() {
    let formatter = Formatter::new();
    let result = formatter.format(r#"{"a":1,"b":[1,2,3]}"#).unwrap();

    assert_eq!(result.kind, FormatKind::Json);
    assert_eq!(
        result.code,
        "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2,\n    3\n  ]\n}"
    );
}

#[test]
fn single_line_function_is_relaid_out() {
    let formatter = Formatter::new();
    let result = formatter.format("function f(x){return x+1;}").unwrap();

    assert_eq!(result.kind, FormatKind::Javascript);
    assert_eq!(result.code, "function f(x) {\n  return x + 1;\n}");
}

#[test]
fn unquoted_keys_take_the_javascript_path() {
    let formatter = Formatter::new();
    let input = "{a:1, b:2}";

    assert_eq!(classify(input), FormatKind::Javascript);
    assert_eq!(formatter.format(input).unwrap().kind, FormatKind::Javascript);
}

#[test]
fn empty_input_produces_no_output() {
    let formatter = Formatter::new();
    assert!(matches!(formatter.format(""), Err(FormatError::EmptyInput)));
}

#[test]
fn malformed_json_still_renders_as_javascript() {
    // Not strict JSON, no JavaScript markers either; the wrapped-brace
    // rule routes it to the JavaScript renderer, which cannot fail.
    let formatter = Formatter::new();
    let result = formatter.format(r#"{"a": }"#).unwrap();
    assert_eq!(result.kind, FormatKind::Javascript);
}

#[test]
fn permissive_literals_normalize_to_strict_json() {
    let formatter = Formatter::new();
    let output = formatter.format_json("{a:1, b:'two',}").unwrap();
    assert_eq!(output, "{\n  \"a\": 1,\n  \"b\": \"two\"\n}");

    let reparsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(reparsed, serde_json::json!({"a": 1, "b": "two"}));
}

#[test]
fn forced_json_mode_reports_the_parse_failure() {
    let formatter = Formatter::new();
    let err = formatter
        .format_as("console.log('hi');", FormatKind::Json)
        .unwrap_err();
    assert!(matches!(err, FormatError::InvalidJson { .. }));
}

#[test]
fn json_formatting_is_idempotent_on_valid_input() {
    let formatter = Formatter::new();
    let once = formatter
        .format_json(r#"{"deep":{"list":[1,[2,3]],"flag":false}}"#)
        .unwrap();
    let twice = formatter.format_json(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn serializable_values_canonicalize_directly() {
    #[derive(Serialize)]
    struct Player {
        name: String,
        scores: Vec<i32>,
        active: bool,
    }

    let player = Player {
        name: "Alice".into(),
        scores: vec![95, 87, 92],
        active: true,
    };

    let output = Formatter::new().serialize(&player).unwrap();
    assert_eq!(
        output,
        "{\n  \"name\": \"Alice\",\n  \"scores\": [\n    95,\n    87,\n    92\n  ],\n  \"active\": true\n}"
    );
}

#[test]
fn javascript_never_fails_on_garbage() {
    let formatter = Formatter::new();
    for input in ["@@@@", ")))((", "???", "} } }", "\"unterminated"] {
        let result = formatter.format(input).unwrap();
        assert_eq!(result.kind, FormatKind::Javascript);
        assert!(!result.code.is_empty());
    }
}
