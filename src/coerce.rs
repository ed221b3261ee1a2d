//! Best-effort coercions
//!
//! When a primitive guard rejects its input and the error policy lets the
//! call continue, the guard still has to hand back a value of its target
//! type. These functions compute that value using the loose conversion rules
//! common to untyped data: strings parse to numbers (decimal, exponent, and
//! unsigned `0x`/`0o`/`0b` literals), anything converts to a string, and
//! truthiness decides booleans.
//!
//! None of these functions fail. Their output is *not* validated data.
//!
//! ```
//! use bulwark::coerce::{to_boolean, to_number, to_string};
//! use bulwark::value::Value;
//!
//! assert_eq!(to_number(&Value::from(" 42 ")), 42.0);
//! assert!(to_number(&Value::from("forty-two")).is_nan());
//! assert_eq!(to_string(&Value::from(vec![1, 2])), "1,2");
//! assert!(!to_boolean(&Value::from("")));
//! ```

use crate::value::{format_number, Value};

/// Coerce any value to a number. Unconvertible values become NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => parse_number(s),
        Value::Array(_) => parse_number(&to_string(value)),
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if let Some(n) = parse_prefixed(trimmed) {
        return n;
    }
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust's parser also takes "inf" and "nan" spellings; untyped data does not.
        t if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        t => t.parse().unwrap_or(f64::NAN),
    }
}

// Unsigned `0x` / `0o` / `0b` integer literals, either letter case.
fn parse_prefixed(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let parsed = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(parsed.unwrap_or(f64::NAN))
}

/// Coerce any value to a string.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Undefined | Value::Null => String::new(),
                other => to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Coerce any value to a boolean by truthiness.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
