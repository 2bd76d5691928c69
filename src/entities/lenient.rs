//! Forgiving decoders for backend fields whose JSON shape varies.
//!
//! Decimal columns may arrive as numbers or as numeric strings, and optional
//! columns may arrive as `null`. One odd record must not sink a whole list.

use crate::core::totals::parse_amount;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
    Text(String),
}

/// A money value given as a number, a numeric string or `null` (read as 0).
pub fn money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[allow(clippy::cast_precision_loss)]
    let value = match Option::<Number>::deserialize(deserializer)? {
        None => 0.0,
        Some(Number::Int(n)) => n as f64,
        Some(Number::Float(n)) => n,
        Some(Number::Text(s)) => parse_amount(&s),
    };
    Ok(value)
}

/// A count given as an integer, a float (truncated), a numeric string or `null` (read as 0).
pub fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[allow(clippy::cast_possible_truncation)]
    let value = match Option::<Number>::deserialize(deserializer)? {
        None => 0,
        Some(Number::Int(n)) => n,
        Some(Number::Float(n)) => n as i64,
        Some(Number::Text(s)) => parse_amount(&s) as i64,
    };
    Ok(value)
}

/// `null` decodes to the type's default, e.g. an empty list.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
