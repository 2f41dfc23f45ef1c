//! Number formatting and serialization
//!
//! JSON has no encoding for infinities or NaN, so non-finite values are written as the
//! strings `"inf"`, `"-inf"` and `"NaN"`. Finite values stay plain JSON numbers. Use with
//! `#[serde(with = "crate::number")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest magnitude printed in positional notation
const POSITIONAL_MAX: f64 = 1e21;
/// Smallest non-zero magnitude printed in positional notation
const POSITIONAL_MIN: f64 = 1e-6;

/// Format a value for console output
///
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent form (`1e+300`).
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude)
    {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

/// Serialize an `f64`, writing non-finite values as strings
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        value.serialize(serializer)
    } else {
        format_number(*value).serialize(serializer)
    }
}

/// Deserialize an `f64` written by [`serialize`]
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            other => Err(serde::de::Error::custom(format!(
                "expected a number, \"inf\", \"-inf\" or \"NaN\", got \"{}\"",
                other
            ))),
        },
    }
}

/// JSON value for `value` using the same encoding
pub fn to_json_value(value: f64) -> serde_json::Value {
    if value.is_finite() {
        serde_json::Value::from(value)
    } else {
        serde_json::Value::String(format_number(value))
    }
}
