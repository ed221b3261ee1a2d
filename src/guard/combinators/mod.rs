//! Concrete combinator types for guard composition.
//!
//! Every combinator is a small struct owning its inner guards. Building a
//! guard tree allocates nothing beyond the field shapes of [`Object`]; the
//! tree is built once and reused for every validation.
//!
//! Most users won't need to name these types. Use the constructor functions
//! (`array`, `object`, ...) and the methods on
//! [`GuardExt`](crate::guard::GuardExt), which return them behind
//! `impl Guard`.

mod array;
mod either;
mod ensure;
mod from_fn;
mod map;
mod nullable;
mod object;
mod record_of;

pub use array::{array, Array};
pub use either::{either, Either};
pub use ensure::Ensure;
pub use from_fn::{from_fn, FromFn};
pub use map::Map;
pub use nullable::{nullable, optional, Nullable, Optional, Presence};
pub use object::{object, Object, Shape};
pub use record_of::{record_of, RecordOf};
