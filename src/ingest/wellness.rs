// ABOUTME: Daily wellness mapper for HRV, resting heart rate, and sleep payloads
// ABOUTME: Walks every known response shape in order and keeps missing values as None
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{first_positive, parse_date, positive_number, IngestResult};
use coaching_core::models::WellnessDay;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

const HRV_KEYS: &[&str] = &["lastNightAvg", "avgOvernightHrv"];
const HRV_FLAT_KEYS: &[&str] = &["lastNightAvg", "avgOvernightHrv", "averageHrv", "overnightAvg"];
const RHR_KEYS: &[&str] = &["restingHeartRate", "rhr", "value"];
const HEART_RATES_RHR_KEYS: &[&str] = &["restingHeartRate", "rhr", "resting_hr"];

/// Raw responses collected for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessPayload {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// HRV endpoint response
    #[serde(default)]
    pub hrv: Option<Value>,
    /// Resting heart rate endpoint response
    #[serde(default)]
    pub rhr: Option<Value>,
    /// Daily heart rates endpoint response
    #[serde(default)]
    pub heart_rates: Option<Value>,
    /// Sleep endpoint response
    #[serde(default)]
    pub sleep: Option<Value>,
}

/// Map one day's raw responses into a wellness record
///
/// # Errors
///
/// Returns `IngestError::InvalidDate` when the date is not `YYYY-MM-DD`.
pub fn map_wellness_day(payload: &WellnessPayload) -> IngestResult<WellnessDay> {
    let date = parse_date(&payload.date)?;

    let hrv_ms = payload.hrv.as_ref().and_then(extract_hrv);
    let sleep = payload.sleep.as_ref();
    let resting_hr = payload
        .rhr
        .as_ref()
        .and_then(extract_rhr)
        .or_else(|| first_positive(payload.heart_rates.as_ref(), HEART_RATES_RHR_KEYS))
        .or_else(|| first_positive(sleep, &["restingHeartRate"]));

    let sleep_dto = sleep.and_then(|s| s.get("dailySleepDTO"));
    let sleep_seconds = positive_number(sleep_dto.and_then(|d| d.get("sleepTimeSeconds")))
        .map(|s| s as u32);
    let sleep_score = positive_number(
        sleep_dto
            .and_then(|d| d.get("sleepScores"))
            .and_then(|s| s.get("overall"))
            .and_then(|o| o.get("value")),
    );

    debug!(
        %date,
        hrv_ms = ?hrv_ms,
        resting_hr = ?resting_hr,
        sleep_score = ?sleep_score,
        "Wellness day mapped"
    );

    Ok(WellnessDay {
        date,
        hrv_ms,
        resting_hr,
        sleep_seconds,
        sleep_score,
    })
}

/// Overnight HRV from any known response shape
///
/// Accepts a bare number, else tries a non-empty `hrvSummary`/`hrvSummaryDTO`,
/// then flat fields, then a nested `hrv` object.
#[must_use]
pub fn extract_hrv(hrv: &Value) -> Option<f64> {
    if let Some(value) = positive_number(Some(hrv)) {
        return Some(value);
    }

    let summary = ["hrvSummary", "hrvSummaryDTO"]
        .iter()
        .filter_map(|key| hrv.get(*key))
        .find(|s| s.as_object().is_some_and(|o| !o.is_empty()));

    first_positive(summary, HRV_KEYS)
        .or_else(|| first_positive(Some(hrv), HRV_FLAT_KEYS))
        .or_else(|| first_positive(hrv.get("hrv").filter(|h| h.is_object()), HRV_KEYS))
}

/// Resting heart rate from a number or an object response
#[must_use]
pub fn extract_rhr(rhr: &Value) -> Option<f64> {
    positive_number(Some(rhr)).or_else(|| first_positive(Some(rhr), RHR_KEYS))
}
