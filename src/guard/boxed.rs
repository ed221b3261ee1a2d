//! BoxedGuard - type-erased guard for opt-in boxing.
//!
//! Use `BoxedGuard` when you need to:
//! - Store guards of different types in a collection
//! - Return different guards from match arms
//! - Build recursive guards

use std::fmt;

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::Value;

/// A type-erased guard producing `T`.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// fn guard_for(kind: &str) -> BoxedGuard<Value> {
///     match kind {
///         "number" => number().map(Value::from).boxed(),
///         _ => string().map(Value::from).boxed(),
///     }
/// }
///
/// assert!(is(&Value::from(1), &guard_for("number")));
/// assert!(is(&Value::from("1"), &guard_for("text")));
/// ```
pub struct BoxedGuard<T> {
    inner: Box<dyn Guard<Output = T>>,
}

impl<T> BoxedGuard<T> {
    /// Box any guard producing `T`.
    pub fn new<G>(guard: G) -> Self
    where
        G: Guard<Output = T> + 'static,
    {
        BoxedGuard {
            inner: Box::new(guard),
        }
    }
}

impl<T> fmt::Debug for BoxedGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedGuard")
            .field("inner", &"<guard>")
            .finish()
    }
}

impl<T> Guard for BoxedGuard<T> {
    type Output = T;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<T, Failure> {
        self.inner.run(input, scope)
    }
}
