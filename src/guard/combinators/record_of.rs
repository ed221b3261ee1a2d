//! RecordOf combinator - validates every value of a dictionary.

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::{Map, Value};

/// RecordOf combinator - applies one guard to every value of a structure.
///
/// Unlike [`object`](crate::object), the key set is not declared: every key
/// present in the input is kept and its value checked against `inner`.
/// Value failures are not caught or annotated with the key; they propagate
/// from the inner guard unchanged.
///
/// Non-structure input follows the same rule as `object`: the failure is
/// signalled and, if the policy does not raise, the raw input is returned.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
/// use serde_json::json;
///
/// let scores = record_of(number());
/// assert!(is(&json!({"ann": 3, "bob": 5}).into(), &scores));
///
/// let err = validate(&scores, &json!({"ann": 3, "bob": "5"}).into()).unwrap_err();
/// assert_eq!(err.to_string(), "Expected number, got \"5\"");
/// ```
#[derive(Debug, Clone)]
pub struct RecordOf<G> {
    pub(crate) inner: G,
}

/// Accept a structure whose every value passes `inner`.
pub fn record_of<G: Guard>(inner: G) -> RecordOf<G> {
    RecordOf { inner }
}

impl<G> Guard for RecordOf<G>
where
    G: Guard,
    Value: From<G::Output>,
{
    type Output = Value;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Value, Failure> {
        let source = match input {
            Value::Object(map) => map,
            other => {
                return scope.reject(
                    Failure::NotAStructure {
                        actual: other.clone(),
                    },
                    || other.clone(),
                )
            }
        };

        source
            .iter()
            .map(|(key, item)| Ok((key.clone(), Value::from(self.inner.run(item, scope)?))))
            .collect::<Result<Map, Failure>>()
            .map(Value::Object)
    }
}
