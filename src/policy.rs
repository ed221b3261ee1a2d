//! Error policy configuration
//!
//! An [`ErrorPolicy`] decides what happens to a failure that reaches a call
//! site outside suppression:
//!
//! - [`ReportingMode::Default`]: the failure is returned as `Err` and the call
//!   fails.
//! - [`ReportingMode::Custom`]: the failure message is handed to a
//!   caller-supplied handler, and the guard carries on with a best-effort
//!   value. This is the log-and-continue mode.
//!
//! Policies are pure data built from a [`ValidatorConfig`]. They hold no
//! call state, so one policy can back any number of concurrent validations.
//!
//! # Examples
//!
//! ```rust
//! use bulwark::policy::{ErrorPolicy, ReportingMode, ValidatorConfig};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let config = ValidatorConfig::new()
//!     .with_error_handler(move |msg| sink.lock().unwrap().push(msg.to_string()));
//!
//! let policy = ErrorPolicy::from_config(&config);
//! assert_eq!(policy.mode(), ReportingMode::Custom);
//! assert_eq!(ErrorPolicy::raising().mode(), ReportingMode::Default);
//! ```

use std::fmt;
use std::sync::Arc;

/// Callback receiving the message of every failure reported in Custom mode.
pub type ErrorHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// How unsuppressed failures are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingMode {
    /// Failures are returned as errors.
    Default,
    /// Failures go to the custom handler; guards return best-effort values.
    Custom,
}

/// Configuration for a [`Validator`](crate::Validator).
///
/// # Example
///
/// ```rust
/// use bulwark::{Validator, ValidatorConfig};
///
/// let validator = Validator::with_config(
///     ValidatorConfig::new().with_error_handler(|msg| eprintln!("invalid input: {}", msg)),
/// );
/// ```
#[derive(Clone, Default)]
pub struct ValidatorConfig {
    custom_error_handler: Option<ErrorHandler>,
}

impl ValidatorConfig {
    /// Configuration with no custom handler: every unsuppressed failure raises.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report failures to `handler` instead of raising them.
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.custom_error_handler = Some(Arc::new(handler));
        self
    }

    /// Report failures as `WARN` events on the `bulwark` target.
    #[cfg(feature = "tracing")]
    pub fn with_tracing_handler(self) -> Self {
        self.with_error_handler(|msg| {
            tracing::warn!(target: "bulwark", failure = %msg, "validation failure");
        })
    }

    /// The configured handler, if any.
    pub fn error_handler(&self) -> Option<&ErrorHandler> {
        self.custom_error_handler.as_ref()
    }
}

impl fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorConfig")
            .field(
                "custom_error_handler",
                &self.custom_error_handler.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

/// The error policy one validator set is bound to.
#[derive(Clone)]
pub struct ErrorPolicy {
    handler: Option<ErrorHandler>,
}

impl ErrorPolicy {
    /// Policy in [`ReportingMode::Default`].
    pub fn raising() -> Self {
        ErrorPolicy { handler: None }
    }

    /// Build the policy described by `config`.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        ErrorPolicy {
            handler: config.custom_error_handler.clone(),
        }
    }

    /// Current reporting mode.
    pub fn mode(&self) -> ReportingMode {
        match self.handler {
            Some(_) => ReportingMode::Custom,
            None => ReportingMode::Default,
        }
    }

    pub(crate) fn handler(&self) -> Option<&ErrorHandler> {
        self.handler.as_ref()
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self::raising()
    }
}

impl fmt::Debug for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorPolicy")
            .field("mode", &self.mode())
            .finish()
    }
}
