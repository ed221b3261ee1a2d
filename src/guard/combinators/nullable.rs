//! Nullable and Optional combinators - let a marker value through.

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::Value;

/// Nullable combinator - accepts `null`, otherwise delegates to the inner guard.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let maybe_count = nullable(number());
/// assert_eq!(validate(&maybe_count, &Value::Null), Ok(None));
/// assert_eq!(validate(&maybe_count, &Value::from(3)), Ok(Some(3.0)));
/// assert!(validate(&maybe_count, &Value::Undefined).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Nullable<G> {
    pub(crate) inner: G,
}

/// Optional combinator - accepts an absent value, otherwise delegates to the
/// inner guard.
///
/// Inside an [`object`](crate::object) shape this makes a field optional:
/// an absent field converts back to [`Value::Undefined`] and stays absent in
/// the output.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let maybe_name = optional(string());
/// assert_eq!(validate(&maybe_name, &Value::Undefined), Ok(Presence::Absent));
/// assert_eq!(
///     validate(&maybe_name, &Value::from("x")),
///     Ok(Presence::Present("x".to_string()))
/// );
/// assert!(validate(&maybe_name, &Value::Null).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Optional<G> {
    pub(crate) inner: G,
}

/// Accept `null` or whatever `inner` accepts.
pub fn nullable<G: Guard>(inner: G) -> Nullable<G> {
    Nullable { inner }
}

/// Accept an absent value or whatever `inner` accepts.
pub fn optional<G: Guard>(inner: G) -> Optional<G> {
    Optional { inner }
}

impl<G: Guard> Guard for Nullable<G> {
    type Output = Option<G::Output>;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Self::Output, Failure> {
        match input {
            Value::Null => Ok(None),
            other => self.inner.run(other, scope).map(Some),
        }
    }
}

impl<G: Guard> Guard for Optional<G> {
    type Output = Presence<G::Output>;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Self::Output, Failure> {
        match input {
            Value::Undefined => Ok(Presence::Absent),
            other => self.inner.run(other, scope).map(Presence::Present),
        }
    }
}

/// Output of an [`optional`] guard.
///
/// Kept apart from `Option` so that an absent value and an explicit `null`
/// (the `None` of [`nullable`]) convert back to different [`Value`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence<T> {
    /// The input was [`Value::Undefined`].
    Absent,
    /// The input was present and accepted by the inner guard.
    Present(T),
}

impl<T> Presence<T> {
    /// `true` for [`Presence::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    /// The present value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Absent => None,
            Presence::Present(value) => Some(value),
        }
    }
}

impl<T> From<Presence<T>> for Option<T> {
    fn from(presence: Presence<T>) -> Self {
        presence.into_option()
    }
}

impl<T: Into<Value>> From<Presence<T>> for Value {
    fn from(presence: Presence<T>) -> Self {
        match presence {
            Presence::Absent => Value::Undefined,
            Presence::Present(value) => value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::primitives::{number, string};
    use crate::policy::{ErrorPolicy, ValidatorConfig};

    fn run_raising<G: Guard>(guard: &G, input: Value) -> Result<G::Output, Failure> {
        let policy = ErrorPolicy::raising();
        guard.run(&input, &mut Scope::new(&policy))
    }

    #[test]
    fn test_nullable_passes_null_through() {
        assert_eq!(run_raising(&nullable(number()), Value::Null), Ok(None));
        assert_eq!(run_raising(&nullable(number()), Value::from(1)), Ok(Some(1.0)));
    }

    #[test]
    fn test_nullable_delegates_failure_unchanged() {
        assert_eq!(
            run_raising(&nullable(number()), Value::from("1")),
            run_raising(&number(), Value::from("1")).map(Some)
        );
    }

    #[test]
    fn test_optional_passes_undefined_through() {
        assert_eq!(
            run_raising(&optional(string()), Value::Undefined),
            Ok(Presence::Absent)
        );
        assert!(run_raising(&optional(string()), Value::Null).is_err());
    }

    #[test]
    fn test_nested_markers() {
        let guard = optional(nullable(number()));
        assert_eq!(run_raising(&guard, Value::Undefined), Ok(Presence::Absent));
        assert_eq!(run_raising(&guard, Value::Null), Ok(Presence::Present(None)));
        assert_eq!(
            run_raising(&guard, Value::from(2)),
            Ok(Presence::Present(Some(2.0)))
        );
    }

    #[test]
    fn test_absent_and_null_convert_to_distinct_values() {
        let guard = optional(nullable(number()));
        let absent = run_raising(&guard, Value::Undefined).map(Value::from);
        let null = run_raising(&guard, Value::Null).map(Value::from);

        assert_eq!(absent, Ok(Value::Undefined));
        assert_eq!(null, Ok(Value::Null));
        assert_eq!(Presence::Present(3).into_option(), Some(3));
        assert!(Presence::<i32>::Absent.is_absent());
    }

    #[test]
    fn test_delegates_lenient_behavior() {
        let policy = ErrorPolicy::from_config(&ValidatorConfig::new().with_error_handler(|_| {}));
        let mut scope = Scope::new(&policy);
        let out = optional(number()).run(&Value::from("5"), &mut scope);
        assert_eq!(out, Ok(Presence::Present(5.0)));
        assert_eq!(scope.reported().len(), 1);
    }
}
