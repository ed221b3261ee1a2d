//! Extension trait providing combinator methods for all guards.
//!
//! The `GuardExt` trait is automatically implemented for all types that
//! implement `Guard`. It provides ergonomic combinator methods like `map`,
//! `ensure`, `or`, and `boxed`.

use crate::guard::boxed::BoxedGuard;
use crate::guard::combinators::{Either, Ensure, Map};
use crate::guard::Guard;

/// Extension trait providing combinator methods for all guards.
///
/// This trait is automatically implemented for all types that implement
/// `Guard`. You don't need to implement this trait yourself.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let port = number()
///     .ensure(|n| n.fract() == 0.0, "port must be an integer")
///     .ensure(|n| (1.0..=65535.0).contains(n), "port out of range")
///     .map(|n| n as u16);
///
/// assert_eq!(validate(&port, &Value::from(443)), Ok(443));
/// assert!(!is(&Value::from(70000), &port));
/// ```
pub trait GuardExt: Guard + Sized {
    /// Transform the validated output.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + Send + Sync,
    {
        Map { inner: self, f }
    }

    /// Require the output to satisfy `predicate`, failing with `message` otherwise.
    fn ensure<P>(self, predicate: P, message: impl Into<String>) -> Ensure<Self, P>
    where
        P: Fn(&Self::Output) -> bool + Send + Sync,
    {
        Ensure {
            inner: self,
            predicate,
            message: message.into(),
        }
    }

    /// Accept whatever this guard or `other` accepts. Same as [`either`](crate::either).
    fn or<B: Guard>(self, other: B) -> Either<Self, B> {
        Either {
            left: self,
            right: other,
        }
    }

    /// Erase the guard's type.
    fn boxed(self) -> BoxedGuard<Self::Output>
    where
        Self: 'static,
    {
        BoxedGuard::new(self)
    }
}

impl<G: Guard> GuardExt for G {}
