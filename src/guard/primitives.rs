//! Primitive guards
//!
//! Each primitive accepts exactly one runtime kind and returns the input
//! unchanged. On any other input it signals a [`Failure::KindMismatch`]; if
//! the error policy lets the call continue, the input is coerced with the
//! rules in [`coerce`](crate::coerce) so the guard still produces a value of
//! its target type.
//!
//! # Example
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! assert_eq!(validate(&number(), &Value::from(4)), Ok(4.0));
//! assert_eq!(validate(&string(), &Value::from("4")), Ok("4".to_string()));
//! assert_eq!(validate(&boolean(), &Value::from(true)), Ok(true));
//!
//! let err = validate(&number(), &Value::from("4")).unwrap_err();
//! assert_eq!(err.to_string(), "Expected number, got \"4\"");
//! ```

use crate::coerce;
use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::{Kind, Value};

/// Guard for finite-or-infinite numbers. Rejects NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

/// Guard for strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Str;

/// Guard for booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

/// Guard accepting any input, including `Undefined`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unknown;

/// Accept numbers other than NaN.
pub fn number() -> Number {
    Number
}

/// Accept strings.
pub fn string() -> Str {
    Str
}

/// Accept booleans.
pub fn boolean() -> Boolean {
    Boolean
}

/// Accept anything, returning a copy of the input.
///
/// Useful as a field guard in an [`object`](crate::object) shape for fields
/// whose presence matters but whose content does not.
pub fn unknown() -> Unknown {
    Unknown
}

impl Guard for Number {
    type Output = f64;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<f64, Failure> {
        match input {
            Value::Number(n) if n.is_nan() => scope.reject(Failure::NotANumber, || *n),
            Value::Number(n) => Ok(*n),
            other => scope.reject(Failure::kind_mismatch(Kind::Number, other), || {
                coerce::to_number(other)
            }),
        }
    }
}

impl Guard for Str {
    type Output = String;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<String, Failure> {
        match input {
            Value::String(s) => Ok(s.clone()),
            other => scope.reject(Failure::kind_mismatch(Kind::String, other), || {
                coerce::to_string(other)
            }),
        }
    }
}

impl Guard for Boolean {
    type Output = bool;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<bool, Failure> {
        match input {
            Value::Bool(b) => Ok(*b),
            other => scope.reject(Failure::kind_mismatch(Kind::Boolean, other), || {
                coerce::to_boolean(other)
            }),
        }
    }
}

impl Guard for Unknown {
    type Output = Value;

    fn run(&self, input: &Value, _scope: &mut Scope<'_>) -> Result<Value, Failure> {
        Ok(input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{ErrorPolicy, ValidatorConfig};

    fn raising<G: Guard>(guard: &G, input: Value) -> Result<G::Output, Failure> {
        let policy = ErrorPolicy::raising();
        guard.run(&input, &mut Scope::new(&policy))
    }

    fn lenient<G: Guard>(guard: &G, input: Value) -> (Result<G::Output, Failure>, Vec<Failure>) {
        let policy = ErrorPolicy::from_config(&ValidatorConfig::new().with_error_handler(|_| {}));
        let mut scope = Scope::new(&policy);
        let result = guard.run(&input, &mut scope);
        (result, scope.into_reported())
    }

    #[test]
    fn test_number_accepts_numbers() {
        assert_eq!(raising(&number(), Value::from(4)), Ok(4.0));
        assert_eq!(raising(&number(), Value::from(-0.5)), Ok(-0.5));
        assert_eq!(
            raising(&number(), Value::Number(f64::INFINITY)),
            Ok(f64::INFINITY)
        );
    }

    #[test]
    fn test_number_rejects_nan_with_distinct_failure() {
        assert_eq!(
            raising(&number(), Value::Number(f64::NAN)),
            Err(Failure::NotANumber)
        );
    }

    #[test]
    fn test_number_rejects_other_kinds() {
        assert_eq!(
            raising(&number(), Value::from("4")),
            Err(Failure::KindMismatch {
                expected: Kind::Number,
                actual: Value::from("4"),
            })
        );
        assert!(raising(&number(), Value::Null).is_err());
        assert!(raising(&number(), Value::Undefined).is_err());
    }

    #[test]
    fn test_number_coerces_when_lenient() {
        let (result, reported) = lenient(&number(), Value::from("4"));
        assert_eq!(result, Ok(4.0));
        assert_eq!(reported.len(), 1);

        let (result, reported) = lenient(&number(), Value::Number(f64::NAN));
        assert!(result.unwrap().is_nan());
        assert_eq!(reported, vec![Failure::NotANumber]);
    }

    #[test]
    fn test_string_guard() {
        assert_eq!(raising(&string(), Value::from("")), Ok(String::new()));
        assert_eq!(
            raising(&string(), Value::from(4)).unwrap_err().to_string(),
            "Expected string, got 4"
        );
        assert_eq!(lenient(&string(), Value::from(4)).0, Ok("4".to_string()));
    }

    #[test]
    fn test_boolean_guard() {
        assert_eq!(raising(&boolean(), Value::from(false)), Ok(false));
        assert_eq!(
            raising(&boolean(), Value::from(1)).unwrap_err().to_string(),
            "Expected boolean, got 1"
        );
        assert_eq!(lenient(&boolean(), Value::from(1)).0, Ok(true));
        assert_eq!(lenient(&boolean(), Value::from("")).0, Ok(false));
    }

    #[test]
    fn test_unknown_accepts_everything() {
        assert_eq!(raising(&unknown(), Value::Undefined), Ok(Value::Undefined));
        assert_eq!(
            raising(&unknown(), Value::from(vec![1])),
            Ok(Value::from(vec![1]))
        );
    }
}
