//! Object combinator - validates a declared set of fields.

use std::fmt;

use crate::error::Failure;
use crate::guard::boxed::BoxedGuard;
use crate::guard::ext::GuardExt;
use crate::guard::Guard;
use crate::scope::Scope;
use crate::value::{Map, Value};

/// The declared fields of an [`object`] guard, in declaration order.
///
/// Each field guard is type-erased to produce a [`Value`], so one shape can
/// mix guards of any output type `Value` converts from.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let shape = Shape::new()
///     .field("id", number())
///     .field("name", string())
///     .field("nickname", optional(string()));
///
/// assert_eq!(shape.names().collect::<Vec<_>>(), vec!["id", "name", "nickname"]);
/// ```
#[derive(Default)]
pub struct Shape {
    fields: Vec<(String, BoxedGuard<Value>)>,
}

impl Shape {
    /// An empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Redeclaring a name replaces its guard in place.
    pub fn field<G>(mut self, name: impl Into<String>, guard: G) -> Self
    where
        G: Guard + 'static,
        Value: From<G::Output>,
    {
        let name = name.into();
        let guard = guard.map(Value::from).boxed();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = guard,
            None => self.fields.push((name, guard)),
        }
        self
    }

    /// Declared field names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, BoxedGuard<Value>)> for Shape {
    fn from_iter<I: IntoIterator<Item = (K, BoxedGuard<Value>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Shape::new(), |shape, (name, guard)| shape.field(name, guard))
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(name, _)| (name, "<guard>")))
            .finish()
    }
}

/// Object combinator - validates each declared field of a structure.
///
/// Every declared field is checked against its guard with failures
/// suppressed, so a field failure can be caught here and reported as a
/// [`Failure::FieldError`] naming the field. Fields are visited in
/// declaration order; the first failing field decides the error when the
/// policy raises. When the policy does not raise, the failure is reported
/// and the raw, unvalidated field value is copied into the output instead.
///
/// The output is a [`Value::Object`] holding every declared field exactly
/// once, stored as its guard returned it. Undeclared input fields are
/// dropped. An [`optional`](crate::optional) field missing from the input
/// stays absent (`Undefined`) in the output.
///
/// When the input is not a structure, [`Failure::NotAStructure`] is
/// signalled and, if the policy does not raise, the raw input is returned
/// as-is. That value satisfies nothing; it only surfaces through
/// [`Verdict::Lenient`](crate::Verdict::Lenient).
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
/// use serde_json::json;
///
/// let point = object(Shape::new().field("x", number()).field("y", number()));
///
/// let valid = validate(&point, &json!({"x": 1, "y": 2, "z": 3}).into()).unwrap();
/// assert_eq!(valid, Value::from(json!({"x": 1, "y": 2})));
///
/// let err = validate(&point, &json!({"x": "1", "y": "2"}).into()).unwrap_err();
/// assert_eq!(err.to_string(), "Object 'x' property error: Expected number, got \"1\"");
/// ```
#[derive(Debug)]
pub struct Object {
    pub(crate) shape: Shape,
}

/// Accept a structure whose declared fields pass their guards.
pub fn object(shape: Shape) -> Object {
    Object { shape }
}

impl Guard for Object {
    type Output = Value;

    fn run(&self, input: &Value, scope: &mut Scope<'_>) -> Result<Value, Failure> {
        if !matches!(input, Value::Object(_)) {
            return scope.reject(
                Failure::NotAStructure {
                    actual: input.clone(),
                },
                || input.clone(),
            );
        }

        let mut out = Map::new();
        for (name, guard) in &self.shape.fields {
            let raw = input.get(name);
            let checked = match scope.suppressed(|scope| guard.run(raw, scope)) {
                Ok(value) => value,
                Err(inner) => scope.reject(Failure::field(name.as_str(), inner), || raw.clone())?,
            };
            out.insert(name.clone(), checked);
        }
        Ok(Value::Object(out))
    }
}
