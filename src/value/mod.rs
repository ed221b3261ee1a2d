//! Dynamic values of unknown shape
//!
//! Guards consume a [`Value`]: the untyped form of data that has just crossed
//! a system boundary. It is deliberately close to the JSON data model, with
//! two additions that the guards need to tell apart:
//!
//! - [`Value::Undefined`] marks an absent value (a missing object field),
//!   distinct from an explicit [`Value::Null`].
//! - [`Value::Number`] holds any `f64`, including NaN, so a number that is
//!   "not a number" can be detected and rejected.
//!
//! # Examples
//!
//! ```
//! use bulwark::value::{Kind, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"id": 7, "tags": ["a", "b"]}));
//! assert_eq!(value.kind(), Kind::Object);
//! assert_eq!(value.get("id"), &Value::Number(7.0));
//! assert_eq!(value.get("missing"), &Value::Undefined);
//! assert_eq!(value.to_string(), r#"{"id":7,"tags":["a","b"]}"#);
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::collections::BTreeMap;
use std::fmt;

/// Map type backing [`Value::Object`].
pub type Map = BTreeMap<String, Value>;

static UNDEFINED: Value = Value::Undefined;

/// An input value of unknown shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent-value marker.
    #[default]
    Undefined,
    /// The null-marker.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. May be NaN or infinite.
    Number(f64),
    /// A string.
    String(String),
    /// A sequence of values.
    Array(Vec<Value>),
    /// A structured value keyed by field name.
    Object(Map),
}

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// [`Value::Undefined`]
    Undefined,
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Boolean,
    /// [`Value::Number`]
    Number,
    /// [`Value::String`]
    String,
    /// [`Value::Array`]
    Array,
    /// [`Value::Object`]
    Object,
}

impl Kind {
    /// Lowercase name used in failure messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// The runtime kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Look up an object field.
    ///
    /// Returns [`Value::Undefined`] when the field is missing or when this
    /// value is not an object, mirroring property access on untyped data.
    ///
    /// ```
    /// use bulwark::value::Value;
    ///
    /// assert_eq!(Value::Null.get("a"), &Value::Undefined);
    /// ```
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Object(map) => map.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// `true` for [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the number, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the fields, if this is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Convert into a `serde_json::Value`.
    ///
    /// The conversion is lossy: NaN, infinities and `Undefined` become `null`,
    /// and object entries holding `Undefined` are dropped.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(|n| match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
                        serde_json::Value::from(f as i64)
                    }
                    _ => serde_json::Value::Number(n),
                })
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Value::into_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .filter(|(_, v)| !v.is_undefined())
                    .map(|(k, v)| (k, v.into_json()))
                    .collect(),
            ),
        }
    }
}

/// Format a number the way untyped data usually prints it: integral values
/// without a fractional part, `NaN` and `Infinity` spelled out, and exponent
/// form (`1e-7`, `1e+21`) outside `[1e-6, 1e21)`.
pub(crate) fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let exponent_form = format!("{:e}", n);
        match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponent_form,
        }
    } else if n.fract() == 0.0 {
        // -0 prints as 0
        format!("{}", n as i128)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{:?}:{}", key, item)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(true).kind(), Kind::Boolean);
        assert_eq!(Value::from(1).kind(), Kind::Number);
        assert_eq!(Value::Number(f64::NAN).kind(), Kind::Number);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(vec![1, 2]).kind(), Kind::Array);
        assert_eq!(Value::from(json!({})).kind(), Kind::Object);
    }

    #[test]
    fn test_display_is_json_like() {
        assert_eq!(Value::from(4).to_string(), "4");
        assert_eq!(Value::from(4.5).to_string(), "4.5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
        assert_eq!(Value::from(1e-7).to_string(), "1e-7");
        assert_eq!(Value::from(-1.5e-7).to_string(), "-1.5e-7");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(1e300).to_string(), "1e+300");
        assert_eq!(Value::from("4").to_string(), "\"4\"");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(
            Value::from(json!({"b": [true, null], "a": "x"})).to_string(),
            r#"{"a":"x","b":[true,null]}"#
        );
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert!(!Value::Undefined.is_null());
        assert_eq!(Value::from(vec![1]).as_array(), Some(&[Value::from(1)][..]));
        assert_eq!(Value::from("a").as_array(), None);
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert_eq!(Value::from(2).as_f64(), Some(2.0));
    }

    #[test]
    fn test_get_missing_field_is_undefined() {
        let value = Value::from(json!({"a": 1}));
        assert_eq!(value.get("a"), &Value::Number(1.0));
        assert!(value.get("b").is_undefined());
        assert!(Value::from(3).get("a").is_undefined());
    }

    #[test]
    fn test_option_conversion_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn test_into_json_drops_undefined_and_nan() {
        let mut map = Map::new();
        map.insert("gone".to_string(), Value::Undefined);
        map.insert("nan".to_string(), Value::Number(f64::NAN));
        map.insert("n".to_string(), Value::from(3));
        map.insert("f".to_string(), Value::from(1.5));

        assert_eq!(
            Value::Object(map).into_json(),
            json!({"nan": null, "n": 3, "f": 1.5})
        );
    }

    #[test]
    fn test_from_json_roundtrip_keeps_integers() {
        let json = json!({"id": 7, "tags": ["a"], "ok": false, "none": null});
        assert_eq!(Value::from(json.clone()).into_json(), json);
    }
}
