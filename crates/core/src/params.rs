//! Pure helpers for extracting typed values from a loose `serde_json` object.
//!
//! Each helper takes the params value, a key, and a default; a missing key or
//! wrong-typed value yields the default. These never fail.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, or `default` if missing/mistyped.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, or `default` if missing/mistyped.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, or `default` if missing/mistyped.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}
