//! Lenient numeric coercion
//!
//! Form-backed stores persist whatever the input box held, so prices and
//! quantities arrive either as JSON numbers or as numeric text. Everything
//! that feeds arithmetic goes through these helpers.

use serde::{Deserialize, Deserializer, de::Error as _};

use crate::error::ValidationError;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Parse numeric text. Blank text counts as zero.
pub fn parse_f64(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse integer text. Blank text counts as zero; `"3.0"` is accepted, `"3.5"` is not.
pub fn parse_i64(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    parse_f64(trimmed).and_then(whole_number)
}

fn whole_number(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// serde `deserialize_with` for `f64` fields
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => {
            parse_f64(&s).ok_or_else(|| D::Error::custom(format!("not a number: {s:?}")))
        }
    }
}

/// serde `deserialize_with` for `i64` fields
pub fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => {
            whole_number(n).ok_or_else(|| D::Error::custom(format!("not a whole number: {n}")))
        }
        NumberOrText::Text(s) => {
            parse_i64(&s).ok_or_else(|| D::Error::custom(format!("not a whole number: {s:?}")))
        }
    }
}

/// serde `deserialize_with` for text fields that may be `null`; null reads as `""`
pub fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Price typed by a user. Sign and range are checked by validation.
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    parse_f64(text).ok_or_else(|| ValidationError::NotANumber {
        field: "price",
        text: text.trim().to_string(),
    })
}

/// Stock level typed by a user on the product form
pub fn parse_stock(text: &str) -> Result<i64, ValidationError> {
    parse_i64(text).ok_or_else(|| ValidationError::NotANumber {
        field: "quantity",
        text: text.trim().to_string(),
    })
}

/// Quantity typed by a user for a sale. Must be a positive integer.
pub fn parse_quantity(text: &str) -> Result<i64, ValidationError> {
    match parse_i64(text) {
        Some(qty) if qty > 0 => Ok(qty),
        _ => Err(ValidationError::InvalidQuantity(text.trim().to_string())),
    }
}

/// Signed stock adjustment typed by a user. Zero is rejected.
pub fn parse_adjustment(text: &str) -> Result<i64, ValidationError> {
    match parse_i64(text) {
        Some(delta) if delta != 0 => Ok(delta),
        _ => Err(ValidationError::InvalidAdjustment(text.trim().to_string())),
    }
}
