// ABOUTME: Integration tests for raw provider payload ingestion
// ABOUTME: Covers the duration fallback chain, activity typing, wellness shapes, and stream records
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use coaching_engine::ingest::activity::{extract_duration, map_activity_type};
use coaching_engine::ingest::wellness::{extract_hrv, extract_rhr};
use coaching_engine::ingest::{
    map_activity, map_stream, map_wellness_day, DurationSource, IngestError, WellnessPayload,
};
use coaching_engine::models::WorkoutType;
use serde_json::json;

// ============================================================================
// Activity duration fallback chain
// ============================================================================

#[test]
fn test_duration_as_number() {
    let activity = json!({"duration": 3600.4});
    assert_eq!(
        extract_duration(&activity, None),
        Some((3600, DurationSource::Duration))
    );
}

#[test]
fn test_duration_total_seconds_object() {
    let activity = json!({"duration": {"totalSeconds": 2700}});
    assert_eq!(
        extract_duration(&activity, None),
        Some((2700, DurationSource::DurationTotalSeconds))
    );
}

#[test]
fn test_zero_duration_falls_through_to_elapsed() {
    let activity = json!({"duration": 0, "elapsedDuration": 1800});
    assert_eq!(
        extract_duration(&activity, None),
        Some((1800, DurationSource::ElapsedDuration))
    );

    let activity = json!({"elapsedDurationInSeconds": 1500});
    assert_eq!(
        extract_duration(&activity, None),
        Some((1500, DurationSource::ElapsedDurationInSeconds))
    );
}

#[test]
fn test_duration_from_details() {
    let activity = json!({"activityId": 1});
    let details = json!({"duration": {"totalSeconds": 4000}});
    assert_eq!(
        extract_duration(&activity, Some(&details)),
        Some((4000, DurationSource::DetailsDurationTotalSeconds))
    );

    let details = json!({"elapsedDurationInSeconds": 4100});
    assert_eq!(
        extract_duration(&activity, Some(&details)),
        Some((4100, DurationSource::DetailsElapsedDurationInSeconds))
    );
}

#[test]
fn test_duration_from_summary_dto() {
    let activity = json!({"activityId": 1});
    let details = json!({"summaryDTO": {"elapsedDuration": 5000.9, "duration": 4900}});
    assert_eq!(
        extract_duration(&activity, Some(&details)),
        Some((5000, DurationSource::SummaryElapsedDuration))
    );

    let details = json!({"summaryDTO": {"duration": 4900}});
    assert_eq!(
        extract_duration(&activity, Some(&details)),
        Some((4900, DurationSource::SummaryDuration))
    );
}

#[test]
fn test_no_duration_anywhere() {
    let activity = json!({"duration": null, "elapsedDuration": "soon"});
    let details = json!({"summaryDTO": {}});
    assert_eq!(extract_duration(&activity, Some(&details)), None);
    assert_eq!(DurationSource::SummaryDuration.to_string(), "details.summaryDTO.duration");
}

// ============================================================================
// Activity mapping
// ============================================================================

#[test]
fn test_activity_type_mapping() {
    assert_eq!(map_activity_type("trail_running"), WorkoutType::Run);
    assert_eq!(map_activity_type("indoor_cycling"), WorkoutType::Bike);
    assert_eq!(map_activity_type("strength_training"), WorkoutType::Strength);
    assert_eq!(map_activity_type("yoga"), WorkoutType::Other);
}

#[test]
fn test_map_activity_summary() {
    let activity = json!({
        "activityId": 42,
        "activityName": "Morning Run",
        "activityType": {"typeKey": "running"},
        "startTimeGMT": "2025-03-10 06:30:00",
        "duration": 3000,
        "distance": 10_500.0,
        "averageSpeed": 3.5,
        "averageHR": 150.0,
        "averageRunningCadenceInStepsPerMinute": 172.0
    });
    let details = json!({
        "summaryDTO": {"avgPower": 250.0, "strideLength": 120.0, "verticalOscillation": 8.0}
    });

    let summary = map_activity(&activity, Some(&details)).unwrap();
    assert_eq!(summary.activity_id, Some(42));
    assert_eq!(summary.activity_name.as_deref(), Some("Morning Run"));
    assert_eq!(summary.workout_type, WorkoutType::Run);
    assert_eq!(
        summary.start_time,
        Some(Utc.with_ymd_and_hms(2025, 3, 10, 6, 30, 0).unwrap())
    );
    assert_eq!(summary.duration_seconds, Some(3000));
    assert!((summary.distance_km.unwrap() - 10.5).abs() < 1e-9);
    assert_eq!(summary.avg_cadence, Some(172.0));
    assert_eq!(summary.economy.avg_speed_mps, Some(3.5));
    assert_eq!(summary.economy.avg_power_w, Some(250.0));
    assert_eq!(summary.economy.stride_length_cm, Some(120.0));
    assert_eq!(summary.economy.vertical_oscillation_cm, Some(8.0));

    let session = summary.to_historical_session().unwrap();
    assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert_eq!(session.workout_type, WorkoutType::Run);
    assert!(session.tonnage_kg.is_none());
}

#[test]
fn test_map_activity_defaults_and_missing_values() {
    let summary = map_activity(&json!({"distance": 0}), None).unwrap();
    assert_eq!(summary.workout_type, WorkoutType::Run);
    assert_eq!(summary.distance_km, None);
    assert_eq!(summary.duration_seconds, None);
    assert_eq!(summary.duration_source, None);
    assert!(summary.to_historical_session().is_none());
}

#[test]
fn test_map_activity_rejects_non_objects() {
    let error = map_activity(&json!([1, 2, 3]), None).unwrap_err();
    assert!(matches!(error, IngestError::UnexpectedShape(_)));

    let error = map_activity(&json!({"startTimeGMT": "yesterday"}), None).unwrap_err();
    assert!(matches!(error, IngestError::InvalidTimestamp(_)));
}

// ============================================================================
// Wellness mapping
// ============================================================================

#[test]
fn test_hrv_shapes() {
    assert_eq!(extract_hrv(&json!(55.0)), Some(55.0));
    assert_eq!(
        extract_hrv(&json!({"hrvSummary": {"lastNightAvg": 62}})),
        Some(62.0)
    );
    assert_eq!(
        extract_hrv(&json!({"hrvSummaryDTO": {"avgOvernightHrv": 58}})),
        Some(58.0)
    );
    assert_eq!(
        extract_hrv(&json!({"hrvSummary": {}, "averageHrv": 61})),
        Some(61.0)
    );
    assert_eq!(extract_hrv(&json!({"hrv": {"lastNightAvg": 57}})), Some(57.0));
    assert_eq!(extract_hrv(&json!({"hrvSummary": {"lastNightAvg": 0}})), None);
    assert_eq!(extract_hrv(&json!("n/a")), None);
}

#[test]
fn test_rhr_shapes() {
    assert_eq!(extract_rhr(&json!(48)), Some(48.0));
    assert_eq!(extract_rhr(&json!({"restingHeartRate": 47})), Some(47.0));
    assert_eq!(extract_rhr(&json!({"value": 49})), Some(49.0));
    assert_eq!(extract_rhr(&json!({})), None);
}

#[test]
fn test_map_wellness_day() {
    let payload = WellnessPayload {
        date: "2025-03-10".to_owned(),
        hrv: Some(json!({"hrvSummary": {"lastNightAvg": 62}})),
        rhr: None,
        heart_rates: Some(json!({"restingHeartRate": 46})),
        sleep: Some(json!({
            "dailySleepDTO": {
                "sleepTimeSeconds": 27_000,
                "sleepScores": {"overall": {"value": 81}}
            },
            "restingHeartRate": 50
        })),
    };
    let day = map_wellness_day(&payload).unwrap();
    assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert_eq!(day.hrv_ms, Some(62.0));
    assert_eq!(day.resting_hr, Some(46.0));
    assert_eq!(day.sleep_seconds, Some(27_000));
    assert_eq!(day.sleep_score, Some(81.0));
}

#[test]
fn test_rhr_falls_back_to_sleep() {
    let payload = WellnessPayload {
        date: "2025-03-10".to_owned(),
        sleep: Some(json!({"restingHeartRate": 50})),
        ..WellnessPayload::default()
    };
    let day = map_wellness_day(&payload).unwrap();
    assert_eq!(day.resting_hr, Some(50.0));
    assert_eq!(day.hrv_ms, None);
    assert_eq!(day.sleep_score, None);
}

#[test]
fn test_wellness_payload_deserializes_camel_case() {
    let payload: WellnessPayload = serde_json::from_value(json!({
        "date": "2025-03-09",
        "heartRates": {"restingHeartRate": 45}
    }))
    .unwrap();
    let day = map_wellness_day(&payload).unwrap();
    assert_eq!(day.resting_hr, Some(45.0));
}

#[test]
fn test_invalid_wellness_date() {
    let payload = WellnessPayload {
        date: "10/03/2025".to_owned(),
        ..WellnessPayload::default()
    };
    assert!(matches!(
        map_wellness_day(&payload),
        Err(IngestError::InvalidDate(_))
    ));
}

// ============================================================================
// Stream mapping
// ============================================================================

#[test]
fn test_map_stream_sorts_records() {
    let payload = json!([
        {"timestamp": "2025-03-10T06:00:10Z", "heart_rate": 142, "cadence": 170, "speed": 3.1},
        {"timestamp": "2025-03-10T06:00:05Z", "heart_rate": 141, "stance_time": 245},
        {"timestamp": "2025-03-10T06:00:00Z", "heart_rate": 0, "speed": 0}
    ]);
    let points = map_stream(&payload).unwrap();
    assert_eq!(points.len(), 3);
    assert!(points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    assert_eq!(points[0].heart_rate, None);
    assert_eq!(points[0].speed, Some(0.0));
    assert_eq!(points[1].ground_contact_time, Some(245.0));
    assert_eq!(points[2].cadence, Some(170.0));
}

#[test]
fn test_map_stream_accepts_wrapper_object() {
    let payload = json!({"stream": [{"timestamp": "2025-03-10 06:00:00", "heart_rate": 140}]});
    let points = map_stream(&payload).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].heart_rate, Some(140.0));
    assert_eq!(points[0].cadence, None);
}

#[test]
fn test_map_stream_errors() {
    assert!(matches!(
        map_stream(&json!({"records": []})),
        Err(IngestError::UnexpectedShape(_))
    ));
    assert!(matches!(
        map_stream(&json!([{"heart_rate": 140}])),
        Err(IngestError::MissingField("timestamp"))
    ));
    assert!(matches!(
        map_stream(&json!([{"timestamp": "noon"}])),
        Err(IngestError::InvalidTimestamp(_))
    ));
}
