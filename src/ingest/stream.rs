// ABOUTME: FIT-style stream record mapper producing session data points
// ABOUTME: Accepts a bare array or a {"stream": [...]} wrapper; non-numeric channels become None
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{parse_timestamp, IngestError, IngestResult};
use coaching_core::models::SessionDataPoint;
use serde_json::Value;
use tracing::debug;

/// Map stream records into session points, ordered by timestamp
///
/// Each record carries `timestamp` plus optional `heart_rate`, `cadence`,
/// `speed` and `ground_contact_time`. Zero is a valid channel value here
/// (a standing start has zero speed), so only non-numbers are dropped.
///
/// # Errors
///
/// Returns `IngestError::UnexpectedShape` when no record array is found,
/// `IngestError::MissingField` for a record without a timestamp, and
/// `IngestError::InvalidTimestamp` for an unparsable one.
pub fn map_stream(payload: &Value) -> IngestResult<Vec<SessionDataPoint>> {
    let records = payload
        .as_array()
        .or_else(|| payload.get("stream").and_then(Value::as_array))
        .ok_or(IngestError::UnexpectedShape(
            "stream must be an array or an object with a `stream` array",
        ))?;

    let mut points = records
        .iter()
        .map(map_record)
        .collect::<IngestResult<Vec<_>>>()?;
    points.sort_by_key(|p| p.timestamp);

    debug!(points = points.len(), "Stream mapped");
    Ok(points)
}

fn map_record(record: &Value) -> IngestResult<SessionDataPoint> {
    let raw = record
        .get("timestamp")
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField("timestamp"))?;
    let channel = |key: &str| {
        record
            .get(key)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite() && *v >= 0.0)
    };

    Ok(SessionDataPoint {
        timestamp: parse_timestamp(raw)?,
        heart_rate: channel("heart_rate").filter(|hr| *hr > 0.0),
        speed: channel("speed"),
        cadence: channel("cadence"),
        ground_contact_time: channel("ground_contact_time")
            .or_else(|| channel("stance_time")),
    })
}
