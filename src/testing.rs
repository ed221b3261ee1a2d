//! Testing utilities for code built on guards
//!
//! Assertion macros for the results of [`Validator::validate`](crate::Validator::validate),
//! plus property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use bulwark::prelude::*;
//! use bulwark::{assert_lenient, assert_rejected, assert_valid};
//!
//! let validator = Validator::new();
//! assert_valid!(validator.validate(&number(), &Value::from(1)));
//! assert_rejected!(validator.validate(&number(), &Value::from("1")));
//!
//! let lenient = Validator::with_config(ValidatorConfig::new().with_error_handler(|_| {}));
//! assert_lenient!(lenient.validate(&number(), &Value::from("1")));
//! ```

/// Assert that a validation produced a valid verdict.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
/// use bulwark::assert_valid;
///
/// assert_valid!(Validator::new().validate(&string(), &Value::from("a")));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            Ok($crate::Verdict::Valid(_)) => {}
            Ok($crate::Verdict::Lenient { failures, .. }) => {
                panic!("Expected Valid, got Lenient: {:?}", failures);
            }
            Err(e) => {
                panic!("Expected Valid, got Err: {}", e);
            }
        }
    };
}

/// Assert that a validation raised.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
/// use bulwark::assert_rejected;
///
/// assert_rejected!(Validator::new().validate(&string(), &Value::from(1)));
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($result:expr) => {
        match $result {
            Err(_) => {}
            Ok(verdict) => {
                panic!("Expected Err, got Ok: {:?}", verdict);
            }
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Err(e) => {
                assert_eq!(e.to_string(), $message);
            }
            Ok(verdict) => {
                panic!("Expected Err({:?}), got Ok: {:?}", $message, verdict);
            }
        }
    };
}

/// Assert that a validation reported failures and continued.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
/// use bulwark::assert_lenient;
///
/// let validator = Validator::with_config(ValidatorConfig::new().with_error_handler(|_| {}));
/// assert_lenient!(validator.validate(&string(), &Value::from(1)));
/// ```
#[macro_export]
macro_rules! assert_lenient {
    ($result:expr) => {
        match $result {
            Ok($crate::Verdict::Lenient { .. }) => {}
            Ok($crate::Verdict::Valid(v)) => {
                panic!("Expected Lenient, got Valid: {:?}", v);
            }
            Err(e) => {
                panic!("Expected Lenient, got Err: {}", e);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::value::Value;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(Value::Number),
            "[a-z0-9 ]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(Value::Object),
            ]
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::guard::{number, string};
    use crate::policy::ValidatorConfig;
    use crate::validator::Validator;
    use crate::value::Value;

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Validator::new().validate(&number(), &Value::from(1)));
    }

    #[test]
    fn assert_rejected_macro_with_message() {
        assert_rejected!(
            Validator::new().validate(&number(), &Value::Null),
            "Expected number, got null"
        );
    }

    #[test]
    fn assert_lenient_macro() {
        let validator = Validator::with_config(ValidatorConfig::new().with_error_handler(|_| {}));
        assert_lenient!(validator.validate(&string(), &Value::Null));
    }

    #[test]
    #[should_panic(expected = "Expected Valid, got Err")]
    fn assert_valid_panics_on_rejection() {
        assert_valid!(Validator::new().validate(&number(), &Value::Null));
    }

    #[test]
    #[should_panic(expected = "Expected Err, got Ok")]
    fn assert_rejected_panics_on_success() {
        assert_rejected!(Validator::new().validate(&number(), &Value::from(2)));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::guard::unknown;
        use crate::value::Value;
        use crate::{is, validate};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unknown_accepts_arbitrary_values(value in any::<Value>()) {
                prop_assert!(is(&value, &unknown()));
                // NaN != NaN, so compare rendered forms
                let out = validate(&unknown(), &value).map(|v| v.to_string());
                prop_assert_eq!(out, Ok(value.to_string()));
            }
        }
    }
}
