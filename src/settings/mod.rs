//! Key/value settings collaborator and answer encoding.
//!
//! The sequencer records every captured answer against the step's stable
//! key through the `SettingsStore` trait. Values are stored as strings:
//! integers as decimal, toggles as `true`/`false`, dates as
//! `"yyyy-MM-dd HH:mm:ss zzz"` in UTC. Reads are lenient - a stored value
//! that fails to parse falls back to a caller-supplied default rather
//! than surfacing an error to the user (the next screen matters more
//! than flagging a corrupt write).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Storage format for date answers, rendered in UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Errors raised by strict value parsing.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A stored value failed to parse into the expected type
    #[error("malformed stored value '{value}', expected {expected}")]
    Malformed {
        value: String,
        expected: &'static str,
    },
}

/// A single captured answer, ready to persist.
///
/// # Example
///
/// ```rust
/// use intake::settings::Answer;
///
/// assert_eq!(Answer::Integer(45).encode(), "45");
/// assert_eq!(Answer::Toggle(true).encode(), "true");
/// assert_eq!(Answer::Text("moderate".into()).encode(), "moderate");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    /// Free-form or single-choice text
    Text(String),
    /// Numeric answer (dial values, counts)
    Integer(i64),
    /// Date answer (e.g. birth date), persisted in UTC
    Date(DateTime<Utc>),
    /// Yes/no answer
    Toggle(bool),
}

impl Answer {
    /// Render the answer in its stored string form.
    pub fn encode(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Date(date) => date.format(DATE_FORMAT).to_string(),
            Self::Toggle(flag) => flag.to_string(),
        }
    }
}

/// Strictly parse a stored integer answer.
pub fn parse_integer(value: &str) -> Result<i64, SettingsError> {
    value.trim().parse().map_err(|_| SettingsError::Malformed {
        value: value.to_string(),
        expected: "decimal integer",
    })
}

/// Strictly parse a stored date answer.
///
/// Accepts the `DATE_FORMAT` form; the zone abbreviation is always `UTC`
/// on write, so parsing strips it and interprets the rest as UTC.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, SettingsError> {
    let naive = value.trim().strip_suffix(" UTC").unwrap_or(value.trim());
    NaiveDateTime::parse_from_str(naive, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .map_err(|_| SettingsError::Malformed {
            value: value.to_string(),
            expected: "date as yyyy-MM-dd HH:mm:ss zzz",
        })
}

/// Strictly parse a stored toggle answer.
pub fn parse_toggle(value: &str) -> Result<bool, SettingsError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SettingsError::Malformed {
            value: value.to_string(),
            expected: "'true' or 'false'",
        }),
    }
}

/// Key/value persistence collaborator.
///
/// Reads take `&self` and writes take `&mut self`, so any code holding a
/// shared reference (e.g. a routing function) is read-only by
/// construction. The provided `*_or` readers recover from absent or
/// malformed values by returning the supplied default.
pub trait SettingsStore: Send + Sync {
    /// Fetch the stored value for a key, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Read an integer answer, falling back on absence or parse failure.
    fn integer_or(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|v| parse_integer(&v).ok())
            .unwrap_or(default)
    }

    /// Read a date answer, falling back on absence or parse failure.
    fn date_or(&self, key: &str, default: DateTime<Utc>) -> DateTime<Utc> {
        self.get(key)
            .and_then(|v| parse_date(&v).ok())
            .unwrap_or(default)
    }

    /// Read a toggle answer, falling back on absence or parse failure.
    fn toggle_or(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .and_then(|v| parse_toggle(&v).ok())
            .unwrap_or(default)
    }
}

/// In-memory settings store.
///
/// The default collaborator for tests and demos; production hosts wrap
/// their platform preference store in the same trait.
///
/// # Example
///
/// ```rust
/// use intake::settings::{MemoryStore, SettingsStore};
///
/// let mut store = MemoryStore::new();
/// store.set("goalSelection", "45");
/// assert_eq!(store.get("goalSelection").as_deref(), Some("45"));
/// assert_eq!(store.integer_or("goalSelection", 15), 45);
/// assert_eq!(store.integer_or("missing", 15), 15);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn integer_answers_encode_as_decimal() {
        assert_eq!(Answer::Integer(0).encode(), "0");
        assert_eq!(Answer::Integer(-3).encode(), "-3");
        assert_eq!(Answer::Integer(45).encode(), "45");
    }

    #[test]
    fn date_answers_encode_in_utc_format() {
        let date = Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap();
        assert_eq!(Answer::Date(date).encode(), "1990-06-15 08:30:00 UTC");
    }

    #[test]
    fn date_round_trips_through_encoding() {
        let date = Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap();
        let encoded = Answer::Date(date).encode();
        assert_eq!(parse_date(&encoded).unwrap(), date);
    }

    #[test]
    fn parse_integer_rejects_garbage() {
        assert!(parse_integer("forty-five").is_err());
        assert!(parse_integer("").is_err());
        assert_eq!(parse_integer(" 45 ").unwrap(), 45);
    }

    #[test]
    fn parse_toggle_accepts_only_true_false() {
        assert!(parse_toggle("true").unwrap());
        assert!(!parse_toggle("false").unwrap());
        assert!(parse_toggle("yes").is_err());
    }

    #[test]
    fn malformed_values_fall_back_to_default() {
        let mut store = MemoryStore::new();
        store.set("goalSelection", "not-a-number");
        store.set("termsAccepted", "maybe");

        assert_eq!(store.integer_or("goalSelection", 15), 15);
        assert!(!store.toggle_or("termsAccepted", false));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut store = MemoryStore::new();
        store.set("goalSelection", "30");
        store.set("goalSelection", "45");
        assert_eq!(store.get("goalSelection").as_deref(), Some("45"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn malformed_error_names_expected_type() {
        let err = parse_integer("oops").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("oops"));
        assert!(message.contains("decimal integer"));
    }
}
