// ABOUTME: Activity summary mapper with the multi-location duration fallback chain
// ABOUTME: Extracts type, start time, duration, distance, and economy inputs from provider JSON
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{first_positive, parse_timestamp, positive_number, IngestError, IngestResult};
use chrono::{DateTime, Utc};
use coaching_core::models::{EconomyInput, HistoricalSession, WorkoutType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Where the activity duration was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationSource {
    /// `duration` as a number
    Duration,
    /// `duration.totalSeconds`
    DurationTotalSeconds,
    /// `elapsedDuration`
    ElapsedDuration,
    /// `elapsedDurationInSeconds`
    ElapsedDurationInSeconds,
    /// `details.duration` as a number
    DetailsDuration,
    /// `details.duration.totalSeconds`
    DetailsDurationTotalSeconds,
    /// `details.elapsedDuration`
    DetailsElapsedDuration,
    /// `details.elapsedDurationInSeconds`
    DetailsElapsedDurationInSeconds,
    /// `details.summaryDTO.elapsedDuration`
    SummaryElapsedDuration,
    /// `details.summaryDTO.duration`
    SummaryDuration,
}

impl fmt::Display for DurationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Duration => "duration",
            Self::DurationTotalSeconds => "duration.totalSeconds",
            Self::ElapsedDuration => "elapsedDuration",
            Self::ElapsedDurationInSeconds => "elapsedDurationInSeconds",
            Self::DetailsDuration => "details.duration",
            Self::DetailsDurationTotalSeconds => "details.duration.totalSeconds",
            Self::DetailsElapsedDuration => "details.elapsedDuration",
            Self::DetailsElapsedDurationInSeconds => "details.elapsedDurationInSeconds",
            Self::SummaryElapsedDuration => "details.summaryDTO.elapsedDuration",
            Self::SummaryDuration => "details.summaryDTO.duration",
        })
    }
}

/// Strict activity summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Provider activity id
    pub activity_id: Option<u64>,
    /// Activity name
    pub activity_name: Option<String>,
    /// Modality
    pub workout_type: WorkoutType,
    /// Start time (UTC)
    pub start_time: Option<DateTime<Utc>>,
    /// Duration in seconds
    pub duration_seconds: Option<u32>,
    /// Where the duration was found
    pub duration_source: Option<DurationSource>,
    /// Distance in km
    pub distance_km: Option<f64>,
    /// Average cadence (spm)
    pub avg_cadence: Option<f64>,
    /// Inputs for economy ratios
    pub economy: EconomyInput,
}

impl ActivitySummary {
    /// History record for rollups
    ///
    /// Tonnage and carbohydrate intake are not part of provider summaries and
    /// stay `None`; they come from the athlete's own log.
    #[must_use]
    pub fn to_historical_session(&self) -> Option<HistoricalSession> {
        Some(HistoricalSession {
            date: self.start_time?.date_naive(),
            workout_type: self.workout_type,
            distance_km: self.distance_km,
            tonnage_kg: None,
            carbs_per_hour_g: None,
            gi_distress: false,
        })
    }
}

/// Map a provider activity type key onto a modality
#[must_use]
pub fn map_activity_type(type_key: &str) -> WorkoutType {
    match type_key {
        "running" | "trail_running" | "treadmill_running" | "track_running" => WorkoutType::Run,
        "cycling" | "indoor_cycling" | "road_biking" | "mountain_biking" | "virtual_ride" => {
            WorkoutType::Bike
        }
        "strength_training" => WorkoutType::Strength,
        _ => WorkoutType::Other,
    }
}

/// Map an activity from the list response, with optional full details
///
/// # Errors
///
/// Returns `IngestError::UnexpectedShape` when the activity is not a JSON
/// object, and `IngestError::InvalidTimestamp` when a start time is present
/// but unparsable.
pub fn map_activity(activity: &Value, details: Option<&Value>) -> IngestResult<ActivitySummary> {
    if !activity.is_object() {
        return Err(IngestError::UnexpectedShape("activity must be a JSON object"));
    }
    let details = details.filter(|d| d.is_object());
    let summary_dto = details.and_then(|d| d.get("summaryDTO")).filter(|s| s.is_object());

    let type_key = activity
        .get("activityType")
        .and_then(|t| t.get("typeKey").or(Some(t)))
        .and_then(Value::as_str)
        .unwrap_or("running");

    let start_time = activity
        .get("startTimeGMT")
        .or_else(|| activity.get("startTime"))
        .and_then(Value::as_str)
        .map(parse_timestamp)
        .transpose()?;

    let duration = extract_duration(activity, details);
    if let Some((seconds, source)) = duration {
        debug!(seconds, source = %source, "Activity duration extracted");
    } else {
        warn!(
            activity_id = ?activity.get("activityId"),
            "No valid duration found after checking all sources"
        );
    }

    let sources = [Some(activity), summary_dto];
    let from_any = |keys: &[&str]| sources.iter().find_map(|s| first_positive(*s, keys));

    let economy = EconomyInput {
        avg_speed_mps: from_any(&["averageSpeed"]),
        avg_power_w: from_any(&["avgPower", "averagePower"]),
        avg_hr: from_any(&["averageHR", "averageHeartRate"]),
        stride_length_cm: from_any(&["avgStrideLength", "strideLength"]),
        vertical_oscillation_cm: from_any(&["avgVerticalOscillation", "verticalOscillation"]),
    };

    Ok(ActivitySummary {
        activity_id: activity.get("activityId").and_then(Value::as_u64),
        activity_name: activity
            .get("activityName")
            .and_then(Value::as_str)
            .map(str::to_owned),
        workout_type: map_activity_type(type_key),
        start_time,
        duration_seconds: duration.map(|(seconds, _)| seconds),
        duration_source: duration.map(|(_, source)| source),
        distance_km: from_any(&["distance"]).map(|meters| meters / 1000.0),
        avg_cadence: from_any(&[
            "averageRunningCadenceInStepsPerMinute",
            "averageRunCadence",
            "averageBikingCadenceInRevPerMinute",
        ]),
        economy,
    })
}

/// Duration in whole seconds and where it was found
///
/// Checks the activity, then the details object, then its `summaryDTO`.
#[must_use]
pub fn extract_duration(activity: &Value, details: Option<&Value>) -> Option<(u32, DurationSource)> {
    if let Some(found) = duration_field(
        activity.get("duration"),
        DurationSource::Duration,
        DurationSource::DurationTotalSeconds,
    ) {
        return Some(found);
    }

    let flat = [
        (activity.get("elapsedDuration"), DurationSource::ElapsedDuration),
        (
            activity.get("elapsedDurationInSeconds"),
            DurationSource::ElapsedDurationInSeconds,
        ),
    ];
    if let Some(found) = first_duration(&flat) {
        return Some(found);
    }

    let details = details?;
    if let Some(found) = duration_field(
        details.get("duration"),
        DurationSource::DetailsDuration,
        DurationSource::DetailsDurationTotalSeconds,
    ) {
        return Some(found);
    }

    let summary = details.get("summaryDTO");
    let nested = [
        (details.get("elapsedDuration"), DurationSource::DetailsElapsedDuration),
        (
            details.get("elapsedDurationInSeconds"),
            DurationSource::DetailsElapsedDurationInSeconds,
        ),
        (
            summary.and_then(|s| s.get("elapsedDuration")),
            DurationSource::SummaryElapsedDuration,
        ),
        (
            summary.and_then(|s| s.get("duration")),
            DurationSource::SummaryDuration,
        ),
    ];
    first_duration(&nested)
}

/// A number, or an object carrying `totalSeconds`
fn duration_field(
    value: Option<&Value>,
    as_number: DurationSource,
    as_object: DurationSource,
) -> Option<(u32, DurationSource)> {
    match value? {
        Value::Object(map) => whole_seconds(map.get("totalSeconds")).map(|s| (s, as_object)),
        other => whole_seconds(Some(other)).map(|s| (s, as_number)),
    }
}

fn first_duration(candidates: &[(Option<&Value>, DurationSource)]) -> Option<(u32, DurationSource)> {
    candidates
        .iter()
        .find_map(|(value, source)| whole_seconds(*value).map(|s| (s, *source)))
}

fn whole_seconds(value: Option<&Value>) -> Option<u32> {
    positive_number(value).map(|s| s as u32).filter(|s| *s > 0)
}
