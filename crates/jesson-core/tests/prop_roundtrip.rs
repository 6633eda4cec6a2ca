/// Property-based roundtrip tests for the jesson codec.
///
/// Generates random native values and checks that `parse(stringify(v)) == v`
/// and that re-stringifying the parsed value reproduces the same text.
///
/// Generated values stay inside what the codec reproduces exactly:
/// - Strings contain no backslashes (parse strips them)
/// - Integers have at most 10 digits; larger magnitudes are generated as BigInt
/// - Floats are short decimals with a non-zero fraction (integral floats bake to integers)
use jesson_core::tokenizer::BIGINT_DIGIT_THRESHOLD;
use jesson_core::{parse, parse_tree, stringify, tokenize, Token, Value};
use num_bigint::BigInt;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_ ]{0,12}").unwrap()
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        prop::string::string_regex("[a-z\":,{}\\[\\]\\- ]{0,20}").unwrap(),
        Just(String::new()),
        Just("true".to_string()),
        Just("42".to_string()),
        Just("say \"hi\"".to_string()),
        Just("\"".to_string()),
        Just("caf\u{e9} \u{4f60}\u{597d}".to_string()),
        Just("line1\nline2".to_string()),
    ]
}

fn arb_integer() -> impl Strategy<Value = Value> {
    (-9_999_999_999i64..=9_999_999_999i64).prop_map(Value::Integer)
}

fn arb_bigint() -> impl Strategy<Value = Value> {
    (any::<bool>(), "[1-9][0-9]{10,40}").prop_map(|(negative, digits)| {
        let n: BigInt = digits.parse().unwrap();
        Value::BigInt(if negative { -n } else { n })
    })
}

fn arb_float() -> impl Strategy<Value = Value> {
    (-100_000_000i64..100_000_000i64, 1u32..5u32).prop_filter_map(
        "float must have a fractional part",
        |(mantissa, decimals)| {
            let f = mantissa as f64 / 10f64.powi(decimals as i32);
            (f.fract() != 0.0).then_some(Value::Float(f))
        },
    )
}

fn arb_primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_integer(),
        arb_bigint(),
        arb_float(),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_primitive().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(Value::object),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_key(), arb_value()), 0..8).prop_map(Value::object)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn value_roundtrips_through_text(value in arb_document()) {
        let text = stringify(&value).unwrap();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(&parsed, &value, "text: {}", text);
        prop_assert_eq!(stringify(&parsed).unwrap(), text);
    }

    #[test]
    fn tree_stringify_is_stable(value in arb_document()) {
        let text = stringify(&value).unwrap();
        let tree = parse_tree(&text).unwrap();
        prop_assert_eq!(tree.to_string(), text);
    }

    #[test]
    fn digit_count_decides_integer_kind(negative in any::<bool>(), digits in "[1-9][0-9]{0,29}") {
        let literal = if negative { format!("-{digits}") } else { digits.clone() };
        let tokens = tokenize(&literal).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        if digits.len() > BIGINT_DIGIT_THRESHOLD {
            prop_assert_eq!(&tokens[0], &Token::BigInt(literal.parse::<BigInt>().unwrap()));
        } else {
            prop_assert_eq!(&tokens[0], &Token::Integer(literal.parse::<i64>().unwrap()));
        }
    }

    #[test]
    fn shared_children_never_count_as_cycles(child in arb_value(), copies in 1usize..5) {
        let parent = Value::array(std::iter::repeat_n(child.clone(), copies));
        let root = Value::object([("parent", parent.clone()), ("again", parent)]);
        prop_assert!(stringify(&root).is_ok());
    }
}
