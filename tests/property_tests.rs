use proptest::prelude::*;
use serde_json::{Map, Value};
use snipfmt::{classify, Formatter};

// Strategy for arbitrary JSON value trees: scalars at the leaves, arrays
// and objects stacked up to a few levels deep.
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[ -~]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..5).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn json_formatting_is_idempotent(value in json_value_strategy()) {
        let formatter = Formatter::new();
        let source = serde_json::to_string(&value).unwrap();

        let once = formatter.format_json(&source).unwrap();
        let twice = formatter.format_json(&once).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn json_formatting_round_trips(value in json_value_strategy()) {
        let formatter = Formatter::new();

        let formatted = formatter.serialize(&value).unwrap();
        let reparsed: Value = serde_json::from_str(&formatted).unwrap();

        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn classification_is_deterministic(text in ".{0,200}") {
        prop_assert_eq!(classify(&text), classify(&text));
    }

    #[test]
    fn javascript_formatting_is_pure(text in ".{0,200}") {
        let formatter = Formatter::new();
        prop_assert_eq!(formatter.format_javascript(&text), formatter.format_javascript(&text));
    }

    // A line that already carries single spaces around its operators is a
    // fixed point of the JavaScript renderer.
    #[test]
    fn spaced_expressions_are_fixed_points(
        first in "[a-z]{1,6}",
        rest in prop::collection::vec(
            ("\\+|-|\\*|/|%|=|==|===|!=|!==|<|<=|>|>=|&&|\\|\\|", "[a-z]{1,6}"),
            0..4,
        ),
    ) {
        let mut line = first;
        for (op, ident) in rest {
            line.push(' ');
            line.push_str(&op);
            line.push(' ');
            line.push_str(&ident);
        }

        let formatter = Formatter::new();
        prop_assert_eq!(formatter.format_javascript(&line), line);
    }
}
