//! Guards and guard composition
//!
//! This module holds the [`Guard`] trait, the primitive guards, and the
//! structural combinators that build larger guards out of smaller ones:
//!
//! - [`array`]: every element of a sequence
//! - [`object`]: a declared [`Shape`] of fields
//! - [`record_of`]: every value of a dictionary
//! - [`nullable`] / [`optional`]: let `null` / an absent value through
//! - [`either`]: a union of two guards, nested for more
//!
//! # Example
//!
//! ```rust
//! use bulwark::prelude::*;
//! use serde_json::json;
//!
//! let order = object(
//!     Shape::new()
//!         .field("id", either(number(), string()))
//!         .field("items", array(object(Shape::new().field("sku", string()).field("qty", number()))))
//!         .field("note", optional(nullable(string()))),
//! );
//!
//! let input = json!({
//!     "id": "A-17",
//!     "items": [{"sku": "x1", "qty": 2}],
//!     "note": null,
//! });
//! assert!(is(&input.into(), &order));
//! ```

pub mod boxed;
pub mod combinators;
pub mod ext;
pub mod primitives;
mod trait_def;

pub use boxed::BoxedGuard;
pub use combinators::{
    array, either, from_fn, nullable, object, optional, record_of, Array, Either, Ensure, FromFn,
    Map, Nullable, Object, Optional, Presence, RecordOf, Shape,
};
pub use ext::GuardExt;
pub use primitives::{boolean, number, string, unknown, Boolean, Number, Str, Unknown};
pub use trait_def::Guard;
