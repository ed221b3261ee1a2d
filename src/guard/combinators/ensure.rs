//! Ensure combinator - refines a guard's output with a predicate.

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::Value;

/// Validates the guard's output with a closure predicate.
///
/// If the predicate returns true, the value passes through. Otherwise a
/// [`Failure::Refinement`] with the given message is signalled through the
/// scope like any other failure; when the policy does not raise, the
/// unrefined value is returned.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let age = number().ensure(|n| *n >= 18.0, "Must be 18 or older");
///
/// assert_eq!(validate(&age, &Value::from(25)), Ok(25.0));
/// assert_eq!(
///     validate(&age, &Value::from(12)).unwrap_err().to_string(),
///     "Must be 18 or older"
/// );
/// ```
pub struct Ensure<G, P> {
    pub(crate) inner: G,
    pub(crate) predicate: P,
    pub(crate) message: String,
}

impl<G: std::fmt::Debug, P> std::fmt::Debug for Ensure<G, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ensure")
            .field("inner", &self.inner)
            .field("predicate", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

impl<G, P> Guard for Ensure<G, P>
where
    G: Guard,
    P: Fn(&G::Output) -> bool + Send + Sync,
{
    type Output = G::Output;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<G::Output, Failure> {
        let value = self.inner.run(input, scope)?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            scope.reject(
                Failure::Refinement {
                    message: self.message.clone(),
                },
                move || value,
            )
        }
    }
}
