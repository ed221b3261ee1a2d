//! Validator sets bound to an error policy
//!
//! A [`Validator`] is the factory of this crate: it binds guards to one
//! [`ErrorPolicy`] and runs them, creating a fresh [`Scope`] for every call.
//! Validators built from different configurations coexist freely and never
//! share call state.
//!
//! # Examples
//!
//! ## Raising (the default)
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! let validator = Validator::new();
//! let verdict = validator.validate(&number(), &Value::from(4)).unwrap();
//! assert_eq!(verdict, Verdict::Valid(4.0));
//! assert!(validator.validate(&number(), &Value::from("4")).is_err());
//! ```
//!
//! ## Log and continue
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! let validator = Validator::with_config(
//!     ValidatorConfig::new().with_error_handler(|msg| eprintln!("bad input: {}", msg)),
//! );
//!
//! let verdict = validator.validate(&number(), &Value::from("4")).unwrap();
//! assert!(!verdict.is_valid());
//! assert_eq!(verdict.into_lenient(), 4.0);
//! ```

use crate::error::Failure;
use crate::guard::Guard;
use crate::policy::{ErrorPolicy, ReportingMode, ValidatorConfig};
use crate::scope::Scope;
use crate::value::Value;

/// Result of a validation that did not raise.
///
/// `Lenient` only occurs under a custom error handler: the handler was
/// invoked for each of `failures`, and `value` is a best-effort value that
/// does not satisfy the guard. Accepting it is an explicit opt-in through
/// [`Verdict::into_lenient`] or a match.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<T> {
    /// The input satisfied the guard.
    Valid(T),
    /// The input did not satisfy the guard; the failures were reported.
    Lenient {
        /// Best-effort value. Not validated.
        value: T,
        /// Every failure handed to the custom handler, in order.
        failures: Vec<Failure>,
    },
}

impl<T> Verdict<T> {
    /// `true` if nothing was reported.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }

    /// The value if it is valid.
    pub fn into_valid(self) -> Option<T> {
        match self {
            Verdict::Valid(value) => Some(value),
            Verdict::Lenient { .. } => None,
        }
    }

    /// The value, valid or not.
    pub fn into_lenient(self) -> T {
        match self {
            Verdict::Valid(value) | Verdict::Lenient { value, .. } => value,
        }
    }

    /// Failures reported while producing this verdict.
    pub fn failures(&self) -> &[Failure] {
        match self {
            Verdict::Valid(_) => &[],
            Verdict::Lenient { failures, .. } => failures,
        }
    }
}

/// A set of guards bound to one error policy.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: ErrorPolicy,
}

impl Validator {
    /// Validator in [`ReportingMode::Default`]: unsuppressed failures raise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator configured by `config`.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Validator {
            policy: ErrorPolicy::from_config(&config),
        }
    }

    /// The policy this validator is bound to.
    pub fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    /// Current reporting mode.
    pub fn mode(&self) -> ReportingMode {
        self.policy.mode()
    }

    /// Run `guard` on `input`.
    ///
    /// # Returns
    ///
    /// - `Err(failure)` when a failure reached the top level in Default mode.
    /// - `Ok(Verdict::Valid(_))` when the input satisfied the guard.
    /// - `Ok(Verdict::Lenient { .. })` when failures went to the custom handler.
    pub fn validate<G>(&self, guard: &G, input: &Value) -> Result<Verdict<G::Output>, Failure>
    where
        G: Guard + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("validate", mode = ?self.policy.mode()).entered();

        let mut scope = Scope::new(&self.policy);
        let value = guard.run(input, &mut scope)?;
        let failures = scope.into_reported();
        Ok(if failures.is_empty() {
            Verdict::Valid(value)
        } else {
            Verdict::Lenient { value, failures }
        })
    }

    /// `true` iff `guard` accepts `input`.
    ///
    /// Never invokes the custom handler and never fails.
    pub fn is<G>(&self, input: &Value, guard: &G) -> bool
    where
        G: Guard + ?Sized,
    {
        Scope::new(&self.policy).is(input, guard)
    }

    /// Bind `guard` to this validator's policy.
    pub fn bind<G: Guard>(&self, guard: G) -> Bound<G> {
        Bound {
            validator: self.clone(),
            guard,
        }
    }
}

/// A guard bound to a validator's policy.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let validator = Validator::new();
/// let names = validator.bind(array(string()));
///
/// assert!(names.is(&Value::from(vec!["a", "b"])));
/// assert_eq!(names.call(&Value::from(vec!["a"])).unwrap().into_valid(), Some(vec!["a".to_string()]));
/// ```
#[derive(Debug, Clone)]
pub struct Bound<G> {
    validator: Validator,
    guard: G,
}

impl<G: Guard> Bound<G> {
    /// Run the guard under the bound policy.
    pub fn call(&self, input: &Value) -> Result<Verdict<G::Output>, Failure> {
        self.validator.validate(&self.guard, input)
    }

    /// `true` iff the guard accepts `input`.
    pub fn is(&self, input: &Value) -> bool {
        self.validator.is(input, &self.guard)
    }

    /// The unbound guard.
    pub fn guard(&self) -> &G {
        &self.guard
    }
}

/// Run `guard` on `input`, raising every unsuppressed failure.
///
/// ```rust
/// use bulwark::prelude::*;
///
/// assert_eq!(validate(&array(number()), &Value::from(vec![1, 2])), Ok(vec![1.0, 2.0]));
/// ```
pub fn validate<G>(guard: &G, input: &Value) -> Result<G::Output, Failure>
where
    G: Guard + ?Sized,
{
    let policy = ErrorPolicy::raising();
    guard.run(input, &mut Scope::new(&policy))
}

/// `true` iff `guard` accepts `input`. Never fails.
///
/// ```rust
/// use bulwark::prelude::*;
///
/// assert!(is(&Value::from("x"), &either(number(), string())));
/// assert!(!is(&Value::Null, &number()));
/// ```
pub fn is<G>(input: &Value, guard: &G) -> bool
where
    G: Guard + ?Sized,
{
    let policy = ErrorPolicy::raising();
    Scope::new(&policy).is(input, guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{array, either, number, object, string, Shape};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_validator() -> (Validator, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let validator = Validator::with_config(ValidatorConfig::new().with_error_handler(
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        ));
        (validator, calls)
    }

    #[test]
    fn test_default_validator_raises() {
        let validator = Validator::new();
        assert_eq!(validator.mode(), ReportingMode::Default);
        assert_eq!(
            validator.validate(&number(), &Value::from(1)),
            Ok(Verdict::Valid(1.0))
        );
        assert!(validator.validate(&number(), &Value::Null).is_err());
    }

    #[test]
    fn test_custom_validator_returns_lenient_verdict() {
        let (validator, calls) = counting_validator();
        let verdict = validator
            .validate(&array(number()), &Value::from(vec!["1", "2"]))
            .unwrap();

        assert_eq!(verdict.failures().len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(verdict.clone().into_valid(), None);
        assert_eq!(verdict.into_lenient(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_is_never_invokes_handler() {
        let (validator, calls) = counting_validator();
        assert!(!validator.is(&Value::from("x"), &number()));
        assert!(!validator.is(&json!({"a": 1}).into(), &object(Shape::new().field("a", string()))));
        assert!(validator.is(&Value::from(1), &either(string(), number())));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_validators_are_independent() {
        let (custom, calls) = counting_validator();
        let raising = Validator::new();

        assert!(custom.validate(&number(), &Value::Null).is_ok());
        assert!(raising.validate(&number(), &Value::Null).is_err());
        assert!(custom.validate(&number(), &Value::Null).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_bound_guard_uses_validator_policy() {
        let (validator, calls) = counting_validator();
        let bound = validator.bind(string());

        let verdict = bound.call(&Value::from(4)).unwrap();
        assert_eq!(verdict.failures().len(), 1);
        assert_eq!(verdict.into_lenient(), "4");
        assert!(!bound.is(&Value::from(4)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // the unbound guard still raises under the default policy
        assert!(validate(bound.guard(), &Value::from(4)).is_err());
        assert_eq!(validator.policy().mode(), ReportingMode::Custom);
    }

    #[test]
    fn test_shared_across_threads() {
        let guard = Arc::new(object(Shape::new().field("n", number())));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let guard = Arc::clone(&guard);
                std::thread::spawn(move || {
                    let input: Value = if i % 2 == 0 {
                        json!({"n": i}).into()
                    } else {
                        json!({"n": "bad"}).into()
                    };
                    is(&input, &guard)
                })
            })
            .collect();

        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, false, true, false]);
    }
}
