//! Array combinator - validates every element of a sequence.

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::Value;

/// Array combinator - applies the inner guard to each element in order.
///
/// Elements are validated front to back and the first element failure ends
/// the validation. When the input is not a sequence the guard signals
/// [`Failure::NotASequence`]; if the policy lets the call continue, the
/// input is wrapped into a one-element sequence and validated as that.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
/// use serde_json::json;
///
/// let scores = array(number());
/// assert_eq!(validate(&scores, &json!([1, 2.5]).into()), Ok(vec![1.0, 2.5]));
/// assert!(validate(&scores, &json!([1, "2"]).into()).is_err());
/// assert!(validate(&scores, &Value::from(1)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Array<G> {
    pub(crate) inner: G,
}

/// Accept a sequence whose every element passes `inner`.
pub fn array<G: Guard>(inner: G) -> Array<G> {
    Array { inner }
}

impl<G: Guard> Guard for Array<G> {
    type Output = Vec<G::Output>;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Self::Output, Failure> {
        match input {
            Value::Array(items) => items
                .iter()
                .map(|item| self.inner.run(item, scope))
                .collect(),
            other => {
                scope.reject(
                    Failure::NotASequence {
                        actual: other.clone(),
                    },
                    || (),
                )?;
                Ok(vec![self.inner.run(other, scope)?])
            }
        }
    }
}
