//! FromFn - guard from a closure.

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::Value;

/// Guard from a closure.
///
/// The closure receives the input and the scope, and must signal failures
/// through [`Scope::reject`] so the error policy applies to them.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let even = from_fn(|input, scope| {
///     let n = number().run(input, scope)?;
///     if n % 2.0 == 0.0 {
///         Ok(n)
///     } else {
///         scope.reject(Failure::Refinement { message: format!("{} is odd", n) }, || n)
///     }
/// });
///
/// assert!(is(&Value::from(4), &even));
/// assert_eq!(validate(&even, &Value::from(3)).unwrap_err().to_string(), "3 is odd");
/// ```
pub struct FromFn<F> {
    pub(crate) f: F,
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

/// Build a guard from a closure over the input and the scope.
pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: Fn(&Value, &mut Scope<'_>) -> Result<T, Failure> + Send + Sync,
{
    FromFn { f }
}

impl<F, T> Guard for FromFn<F>
where
    F: Fn(&Value, &mut Scope<'_>) -> Result<T, Failure> + Send + Sync,
{
    type Output = T;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<T, Failure> {
        (self.f)(input, scope)
    }
}
