//! Either combinator - a union of two guards.

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::Value;

/// Either combinator - accepts input that passes either branch.
///
/// The left branch is tried first with failures suppressed; if it fails the
/// right branch is tried the same way. On success the *original input* is
/// returned: `either` decides membership but never transforms, so any
/// coercion a branch would apply is discarded.
///
/// When both branches fail, a single [`Failure::UnionExhausted`] carrying
/// both branch failures is signalled at the caller's suppression level. If
/// the policy does not raise, the original input is still returned.
///
/// Unions of more than two guards nest to the right; the
/// [`either!`](crate::either!) macro builds them.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let id = either(number(), string());
/// assert_eq!(validate(&id, &Value::from(4)), Ok(Value::from(4)));
/// assert_eq!(validate(&id, &Value::from("4")), Ok(Value::from("4")));
///
/// let err = validate(&id, &Value::from(true)).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Union error: Expected number, got true | Expected string, got true"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Either<A, B> {
    pub(crate) left: A,
    pub(crate) right: B,
}

/// Accept whatever `left` or `right` accepts.
pub fn either<A: Guard, B: Guard>(left: A, right: B) -> Either<A, B> {
    Either { left, right }
}

impl<A: Guard, B: Guard> Guard for Either<A, B> {
    type Output = Value;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Value, Failure> {
        let left = match scope.suppressed(|scope| self.left.run(input, scope)) {
            Ok(_) => return Ok(input.clone()),
            Err(failure) => failure,
        };
        let right = match scope.suppressed(|scope| self.right.run(input, scope)) {
            Ok(_) => return Ok(input.clone()),
            Err(failure) => failure,
        };
        scope.reject(Failure::union(left, right), || input.clone())
    }
}

/// Build a right-nested union of any number of guards.
///
/// `either!(a, b, c)` is `either(a, either(b, c))`.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let scalar = bulwark::either!(number(), string(), boolean());
/// assert!(is(&Value::from(true), &scalar));
/// assert!(!is(&Value::Null, &scalar));
/// ```
#[macro_export]
macro_rules! either {
    ($a:expr, $b:expr $(,)?) => {
        $crate::either($a, $b)
    };
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::either($a, $crate::either!($($rest),+))
    };
}
