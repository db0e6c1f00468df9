// ABOUTME: Raw provider payload mappers producing strict, typed inputs for the decision core
// ABOUTME: Activity summaries, wellness days, and FIT-style stream records; missing fields stay None
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Payload ingestion
//!
//! Provider responses are loosely shaped: the same value can live under
//! several keys depending on API version. The mappers here try each known
//! location in order and record `None` when nothing usable is found. A
//! missing value is never turned into zero.

/// Activity summary mapping
pub mod activity;
/// FIT-style stream record mapping
pub mod stream;
/// Daily wellness mapping
pub mod wellness;

pub use activity::{map_activity, ActivitySummary, DurationSource};
pub use stream::map_stream;
pub use wellness::{map_wellness_day, WellnessPayload};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while mapping raw payloads
#[derive(Debug, Error)]
pub enum IngestError {
    /// Payload root or a required container is not a JSON object/array
    #[error("Unexpected payload shape: {0}")]
    UnexpectedShape(&'static str),

    /// A field required to place the record in time is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Timestamp string in none of the supported formats
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Date string not in `YYYY-MM-DD` form
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for ingestion
pub type IngestResult<T> = Result<T, IngestError>;

/// Finite, strictly positive number at `value`
///
/// Provider payloads use `0` for "not recorded", so zero is treated as absent.
pub(crate) fn positive_number(value: Option<&Value>) -> Option<f64> {
    value
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// First positive number among `keys` of an object
pub(crate) fn first_positive(object: Option<&Value>, keys: &[&str]) -> Option<f64> {
    let object = object?;
    keys.iter()
        .find_map(|key| positive_number(object.get(*key)))
}

/// Parse a provider timestamp: RFC 3339, or `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` in UTC
pub(crate) fn parse_timestamp(raw: &str) -> IngestResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| IngestError::InvalidTimestamp(raw.to_owned()))
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(raw: &str) -> IngestResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| IngestError::InvalidDate(raw.to_owned()))
}
