//! Map combinator - transforms the output of a guard.

use crate::error::Failure;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::Value;

/// Map combinator - transforms the validated output.
///
/// The function only sees values the inner guard produced, valid or
/// best-effort. It cannot fail; use [`Ensure`](super::Ensure) for checks.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let port = number().map(|n| n as u16);
/// assert_eq!(validate(&port, &Value::from(8080)), Ok(8080u16));
/// ```
pub struct Map<G, F> {
    pub(crate) inner: G,
    pub(crate) f: F,
}

impl<G: std::fmt::Debug, F> std::fmt::Debug for Map<G, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<G, F, U> Guard for Map<G, F>
where
    G: Guard,
    F: Fn(G::Output) -> U + Send + Sync,
{
    type Output = U;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<U, Failure> {
        self.inner.run(input, scope).map(&self.f)
    }
}

#[cfg(test)]
mod tests {
    use crate::guard::ext::GuardExt;
    use crate::guard::primitives::{number, string};
    use crate::guard::combinators::{object, Shape};
    use crate::value::Value;
    use crate::validate;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct User {
        name: String,
        age: u8,
    }

    #[test]
    fn test_map_transforms_success() {
        let doubled = number().map(|n| n * 2.0);
        assert_eq!(validate(&doubled, &Value::from(21)), Ok(42.0));
    }

    #[test]
    fn test_map_skipped_on_failure() {
        let guard = string().map(|_| -> usize { panic!("should not be called") });
        assert!(validate(&guard, &Value::from(1)).is_err());
    }

    #[test]
    fn test_map_object_into_struct() {
        let user = object(Shape::new().field("name", string()).field("age", number())).map(
            |fields| User {
                name: fields.get("name").as_str().unwrap_or_default().to_string(),
                age: fields.get("age").as_f64().unwrap_or_default() as u8,
            },
        );

        assert_eq!(
            validate(&user, &json!({"name": "Ada", "age": 36}).into()),
            Ok(User {
                name: "Ada".to_string(),
                age: 36
            })
        );
    }
}
