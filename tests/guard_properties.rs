//! Property-based tests for guard laws
//!
//! - identity: a primitive returns its input when the kind matches
//! - idempotence: feeding a guard's output back in yields the same output
//! - `is` agrees with a raising validation and never panics

use bulwark::prelude::*;
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

fn finite_number() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |n| n.is_finite())
}

proptest! {
    #[test]
    fn prop_number_identity(n in finite_number()) {
        prop_assert_eq!(validate(&number(), &Value::from(n)), Ok(n));
    }

    #[test]
    fn prop_string_identity(s in ".{0,16}") {
        prop_assert_eq!(validate(&string(), &Value::from(s.as_str())), Ok(s));
    }

    #[test]
    fn prop_boolean_identity(b in any::<bool>()) {
        prop_assert_eq!(validate(&boolean(), &Value::from(b)), Ok(b));
    }

    #[test]
    fn prop_array_idempotent(items in prop::collection::vec(finite_number(), 0..8)) {
        let guard = array(number());
        let once = validate(&guard, &Value::from(items.clone())).unwrap();
        let twice = validate(&guard, &Value::from(once.clone())).unwrap();
        prop_assert_eq!(&once, &items);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_object_idempotent(
        a in finite_number(),
        b in "[a-z]{0,6}",
        extra in any_value(),
    ) {
        let guard = object(Shape::new().field("a", number()).field("b", string()));
        let input: Value = [
            ("a".to_string(), Value::from(a)),
            ("b".to_string(), Value::from(b)),
            ("z".to_string(), extra),
        ]
        .into_iter()
        .collect();

        let once = validate(&guard, &input).unwrap();
        let twice = validate(&guard, &once).unwrap();
        prop_assert_eq!(once.as_object().map(|m| m.len()), Some(2));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_is_agrees_with_validate(value in any_value()) {
        let guards: Vec<BoxedGuard<Value>> = vec![
            number().map(Value::from).boxed(),
            string().map(Value::from).boxed(),
            boolean().map(Value::from).boxed(),
            array(number()).map(Value::from).boxed(),
            record_of(either(number(), string())).boxed(),
            object(Shape::new().field("a", nullable(number()))).boxed(),
            either(number(), either(array(number()), either(boolean(), string()))).boxed(),
        ];

        for guard in &guards {
            prop_assert_eq!(is(&value, guard), validate(guard, &value).is_ok());
        }
    }

    #[test]
    fn prop_is_silent_under_custom_handler(value in any_value()) {
        let validator = Validator::with_config(
            ValidatorConfig::new().with_error_handler(|msg| panic!("handler called: {}", msg)),
        );
        let guard = object(
            Shape::new()
                .field("a", array(either(number(), string())))
                .field("b", optional(record_of(boolean()))),
        );

        let _ = validator.is(&value, &guard);
    }
}
