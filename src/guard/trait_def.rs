//! Guard trait definition - the core abstraction.
//!
//! A guard narrows a [`Value`] of unknown shape to a value of its `Output`
//! type, or fails. Primitive guards check a single runtime kind; combinators
//! hold inner guards and validate composite shapes by delegating to them.
//!
//! # Design Philosophy
//!
//! This trait follows the same pattern as `Iterator`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - Use `.boxed()` when you need type erasure
//!
//! Guards hold no mutable state. All call-scoped state (whether failures are
//! currently suppressed, what has been reported) travels in the [`Scope`]
//! passed to [`Guard::run`], which is why one guard can be built once and
//! shared freely between threads.

use std::sync::Arc;

use crate::error::Failure;
use crate::scope::Scope;
use crate::value::Value;

/// A validator narrowing untyped input to `Output`.
///
/// Most code never calls [`Guard::run`] directly. Use
/// [`validate`](crate::validate), [`is`](crate::is) or a
/// [`Validator`](crate::Validator), which create the scope for you.
///
/// # Implementing
///
/// A guard signals failure through [`Scope::reject`], passing the
/// best-effort value to continue with when the error policy does not raise:
///
/// ```rust
/// use bulwark::prelude::*;
///
/// #[derive(Debug)]
/// struct NonEmptyString;
///
/// impl Guard for NonEmptyString {
///     type Output = String;
///
///     fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<String, Failure> {
///         match input {
///             Value::String(s) if !s.is_empty() => Ok(s.clone()),
///             other => scope.reject(
///                 Failure::Refinement { message: format!("Expected non-empty string, got {}", other) },
///                 String::new,
///             ),
///         }
///     }
/// }
///
/// assert_eq!(validate(&NonEmptyString, &Value::from("a")), Ok("a".to_string()));
/// assert!(!is(&Value::from(""), &NonEmptyString));
/// ```
pub trait Guard: Send + Sync {
    /// The narrowed type produced on success.
    type Output;

    /// Validate `input` within `scope`.
    ///
    /// # Returns
    ///
    /// `Ok(output)` when the input is valid, or when it is invalid but the
    /// scope's policy reported the failure and asked for a best-effort
    /// value. `Err(failure)` otherwise.
    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Self::Output, Failure>;
}

impl<G: Guard + ?Sized> Guard for &G {
    type Output = G::Output;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Self::Output, Failure> {
        (**self).run(input, scope)
    }
}

impl<G: Guard + ?Sized> Guard for Box<G> {
    type Output = G::Output;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Self::Output, Failure> {
        (**self).run(input, scope)
    }
}

impl<G: Guard + ?Sized> Guard for Arc<G> {
    type Output = G::Output;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Self::Output, Failure> {
        (**self).run(input, scope)
    }
}
