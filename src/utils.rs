use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// Returns the named query parameter, treating an empty value as absent.
pub fn required_param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.as_str())
        .filter(|v| !v.is_empty())
}

/// Reads an absolute expiration from a token payload field.
///
/// Accepts RFC 3339 strings (what this server writes) and integer epoch
/// milliseconds.
pub fn parse_expiration(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Computes the absolute expiry of a token from its relative `expires_in`.
pub fn expiration_from_expires_in(obtained_at: DateTime<Utc>, expires_in: &Value) -> Option<DateTime<Utc>> {
    let seconds = expires_in.as_i64()?;
    if seconds < 0 {
        return None;
    }
    obtained_at.checked_add_signed(Duration::try_seconds(seconds)?)
}

pub fn join_artist_names(names: &[String]) -> String {
    names.join(", ")
}
