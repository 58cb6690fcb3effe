//! Lenient deserializers for record fields.
//!
//! Collections are shared with other writers (checkout, admin CRUD) and carry
//! no schema versioning, so individual fields may be missing or hold the
//! wrong JSON type. These helpers make the defaulting rules part of the
//! record schema instead of leaving callers to discover bad fields at read
//! time: a malformed field degrades to its documented default, never to a
//! failed record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::constants::UNKNOWN_STATUS;

/// Deserialize a monetary amount, treating anything non-numeric as zero.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Deserialize a status label, bucketing missing or non-string values under
/// the explicit unknown label.
pub fn lenient_status<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => s,
        _ => UNKNOWN_STATUS.to_string(),
    })
}

/// Deserialize an identifier-like field, stringifying numbers.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Deserialize an optional display string; wrong-typed values become `None`.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Deserialize a creation timestamp from RFC 3339 or unix seconds, falling
/// back to the epoch so a malformed timestamp sorts last, not panics.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::UNIX_EPOCH),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or(DateTime::UNIX_EPOCH),
        _ => DateTime::UNIX_EPOCH,
    })
}
