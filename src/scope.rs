//! The per-call validation context
//!
//! A [`Scope`] is created for every top-level validation and threaded by
//! `&mut` through every guard it reaches. It carries the one piece of state
//! that changes during a validation: whether failures are *suppressed*.
//!
//! While suppressed, every failure comes back as `Err` regardless of the
//! error policy, so the combinator that asked for suppression can inspect it
//! and decide what to do next (try another branch, annotate it with a field
//! name, answer `false`). Outside suppression the [`ErrorPolicy`] decides.
//!
//! Because the flag lives in the scope rather than in the guards or the
//! policy, nothing leaks between unrelated calls, and concurrent validations
//! never observe each other.
//!
//! # Example
//!
//! ```rust
//! use bulwark::policy::ErrorPolicy;
//! use bulwark::prelude::*;
//!
//! let policy = ErrorPolicy::raising();
//! let mut scope = Scope::new(&policy);
//!
//! assert!(!scope.is_suppressed());
//! let matched = scope.is(&Value::from("4"), &number());
//! assert!(!matched);
//! assert!(!scope.is_suppressed());
//! ```

use crate::error::Failure;
use crate::guard::Guard;
use crate::policy::ErrorPolicy;
use crate::value::Value;

/// Validation context threaded through every guard invocation.
#[derive(Debug)]
pub struct Scope<'p> {
    policy: &'p ErrorPolicy,
    suppressed: bool,
    reported: Vec<Failure>,
}

impl<'p> Scope<'p> {
    /// A fresh, unsuppressed scope governed by `policy`.
    pub fn new(policy: &'p ErrorPolicy) -> Self {
        Scope {
            policy,
            suppressed: false,
            reported: Vec::new(),
        }
    }

    /// Whether failures are currently forced to raise.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// The policy governing unsuppressed failures.
    pub fn policy(&self) -> &ErrorPolicy {
        self.policy
    }

    /// Run `f` with suppression on, restoring the prior state afterwards.
    ///
    /// The prior state is restored whether `f` succeeds or fails, so nested
    /// calls unwind correctly at any depth.
    pub fn suppressed<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let prior = self.suppressed;
        self.suppressed = true;
        let out = f(self);
        self.suppressed = prior;
        out
    }

    /// Signal a failure.
    ///
    /// Returns `Err(failure)` when suppressed or when the policy raises.
    /// Otherwise the failure goes to the custom handler, is recorded on the
    /// scope, and `fallback` provides the best-effort value to continue with.
    pub fn reject<T>(&mut self, failure: Failure, fallback: impl FnOnce() -> T) -> Result<T, Failure> {
        #[cfg(feature = "tracing")]
        tracing::trace!(suppressed = self.suppressed, %failure, "guard rejected input");

        if self.suppressed {
            return Err(failure);
        }
        match self.policy.handler() {
            None => Err(failure),
            Some(handler) => {
                let message = failure.to_string();
                #[cfg(feature = "tracing")]
                tracing::debug!(failure = %message, "reporting failure to custom handler");
                handler(&message);
                self.reported.push(failure);
                Ok(fallback())
            }
        }
    }

    /// Test `input` against `guard` without surfacing any failure.
    ///
    /// Reentrant: safe to call from inside a guard that is itself running
    /// suppressed.
    pub fn is<G: Guard + ?Sized>(&mut self, input: &Value, guard: &G) -> bool {
        self.suppressed(|scope| guard.run(input, scope).is_ok())
    }

    /// Failures handed to the custom handler so far.
    pub fn reported(&self) -> &[Failure] {
        &self.reported
    }

    pub(crate) fn into_reported(self) -> Vec<Failure> {
        self.reported
    }
}
