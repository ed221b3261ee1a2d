//! # Bulwark
//!
//! > *Validate once, at the wall.*
//!
//! Composable runtime guards for data of unknown shape.
//!
//! ## Philosophy
//!
//! Data arriving from outside (a parsed request body, a config file, a
//! message off a queue) has no type you can trust. **Bulwark** narrows it at
//! the boundary with small guards that compose into larger ones:
//! - **Primitives** check one runtime kind: [`number`], [`string`], [`boolean`]
//! - **Combinators** check shapes: [`array`], [`object`], [`record_of`],
//!   [`nullable`], [`optional`], [`either`]
//! - **Policies** decide how failures surface: raise, or report to a handler
//!   and carry on with a best-effort value
//!
//! ## Quick Example
//!
//! ```rust
//! use bulwark::prelude::*;
//! use serde_json::json;
//!
//! let user = object(
//!     Shape::new()
//!         .field("name", string())
//!         .field("age", number())
//!         .field("email", nullable(string())),
//! );
//!
//! let input: Value = json!({"name": "Ada", "age": 36, "email": null}).into();
//! assert!(is(&input, &user));
//!
//! let bad: Value = json!({"name": "Ada", "age": "36", "email": null}).into();
//! match validate(&user, &bad) {
//!     Ok(_) => unreachable!(),
//!     Err(failure) => {
//!         assert_eq!(
//!             failure.to_string(),
//!             "Object 'age' property error: Expected number, got \"36\""
//!         );
//!     }
//! }
//! ```
//!
//! ## Log and continue
//!
//! ```rust
//! use bulwark::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::with_config(
//!     ValidatorConfig::new().with_error_handler(|msg| eprintln!("invalid payload: {}", msg)),
//! );
//!
//! let verdict = validator
//!     .validate(&array(number()), &json!([1, "2"]).into())
//!     .unwrap();
//!
//! match verdict {
//!     Verdict::Valid(values) => println!("clean: {:?}", values),
//!     Verdict::Lenient { value, failures } => {
//!         assert_eq!(value, vec![1.0, 2.0]);
//!         assert_eq!(failures.len(), 1);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod coerce;
pub mod error;
pub mod guard;
pub mod policy;
pub mod scope;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error::Failure;
pub use guard::{
    array, boolean, either, from_fn, nullable, number, object, optional, record_of, string,
    unknown, BoxedGuard, Guard, GuardExt, Presence, Shape,
};
pub use policy::{ErrorPolicy, ReportingMode, ValidatorConfig};
pub use scope::Scope;
pub use validator::{is, validate, Bound, Validator, Verdict};
pub use value::{Kind, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Failure;
    pub use crate::guard::{
        array, boolean, either, from_fn, nullable, number, object, optional, record_of, string,
        unknown, BoxedGuard, Guard, GuardExt, Presence, Shape,
    };
    pub use crate::policy::{ReportingMode, ValidatorConfig};
    pub use crate::scope::Scope;
    pub use crate::validator::{is, validate, Validator, Verdict};
    pub use crate::value::{Kind, Value};
}
