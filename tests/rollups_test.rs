// ABOUTME: Integration tests for rolling aggregates over session and wellness history
// ABOUTME: Covers load windows, strength recency, the HRV baseline, and the gut training index
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use coaching_engine::coaching_intelligence::config::{FuelingThresholds, RollupWindows};
use coaching_engine::{compute_rollups, RollingAggregates};
use coaching_engine::models::{HistoricalSession, WellnessDay, WorkoutType};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn run(d: u32, km: f64) -> HistoricalSession {
    HistoricalSession {
        date: day(d),
        workout_type: WorkoutType::Run,
        distance_km: Some(km),
        tonnage_kg: None,
        carbs_per_hour_g: None,
        gi_distress: false,
    }
}

fn lift(d: u32, kg: f64) -> HistoricalSession {
    HistoricalSession {
        date: day(d),
        workout_type: WorkoutType::Strength,
        distance_km: None,
        tonnage_kg: Some(kg),
        carbs_per_hour_g: None,
        gi_distress: false,
    }
}

fn fuelled_run(d: u32, carbs: f64, gi_distress: bool) -> HistoricalSession {
    HistoricalSession {
        carbs_per_hour_g: Some(carbs),
        gi_distress,
        ..run(d, 25.0)
    }
}

fn wellness(d: u32, hrv: Option<f64>, sleep: Option<f64>) -> WellnessDay {
    WellnessDay {
        date: day(d),
        hrv_ms: hrv,
        resting_hr: Some(48.0),
        sleep_seconds: Some(27_000),
        sleep_score: sleep,
    }
}

fn rollups(sessions: &[HistoricalSession], days: &[WellnessDay]) -> RollingAggregates {
    compute_rollups(
        sessions,
        days,
        day(10),
        &RollupWindows::default(),
        &FuelingThresholds::default(),
    )
}

#[test]
fn test_load_window_sums_last_seven_days() {
    let sessions = vec![
        lift(8, 3000.0),
        lift(1, 2000.0),
        run(9, 10.0),
        run(5, 15.0),
        run(4, 5.0),
        run(3, 20.0),
        run(11, 30.0),
    ];
    let aggregates = rollups(&sessions, &[]);
    assert!((aggregates.rolling_tonnage_kg - 3000.0).abs() < 1e-9);
    assert!((aggregates.rolling_mileage_km - 30.0).abs() < 1e-9);
    assert_eq!(aggregates.as_of, day(10));
}

#[test]
fn test_days_since_last_lift() {
    let aggregates = rollups(&[lift(1, 2000.0), lift(8, 3000.0), run(9, 10.0)], &[]);
    assert_eq!(aggregates.days_since_last_lift, Some(2));

    let aggregates = rollups(&[lift(10, 1000.0)], &[]);
    assert_eq!(aggregates.days_since_last_lift, Some(0));
}

#[test]
fn test_no_strength_on_record() {
    let aggregates = rollups(&[run(9, 10.0)], &[]);
    assert_eq!(aggregates.days_since_last_lift, None);
    assert!(aggregates.rolling_tonnage_kg.abs() < 1e-9);
}

#[test]
fn test_future_sessions_are_ignored() {
    let aggregates = rollups(&[lift(12, 5000.0), run(11, 10.0)], &[]);
    assert_eq!(aggregates.days_since_last_lift, None);
    assert!(aggregates.rolling_mileage_km.abs() < 1e-9);
}

#[test]
fn test_hrv_baseline_excludes_today_and_older_days() {
    let mut days: Vec<WellnessDay> = (3..=9)
        .map(|d| wellness(d, Some(60.0 + f64::from(d - 3)), Some(80.0)))
        .collect();
    days.push(wellness(2, Some(200.0), Some(80.0)));
    days.push(wellness(10, Some(45.0), Some(55.0)));

    let aggregates = rollups(&[], &days);
    // Mean of 60..=66
    assert!((aggregates.hrv_baseline_ms.unwrap() - 63.0).abs() < 1e-9);
    assert_eq!(aggregates.current_hrv_ms, Some(45.0));
    assert_eq!(aggregates.sleep_score, Some(55.0));
}

#[test]
fn test_missing_wellness_yields_none() {
    let aggregates = rollups(&[], &[wellness(9, None, None)]);
    assert_eq!(aggregates.hrv_baseline_ms, None);
    assert_eq!(aggregates.current_hrv_ms, None);
    assert_eq!(aggregates.sleep_score, None);
}

#[test]
fn test_gut_training_index_counts_clean_fuelled_sessions() {
    let sessions = vec![
        fuelled_run(2, 70.0, false),
        fuelled_run(4, 80.0, true),
        fuelled_run(6, 40.0, false),
        fuelled_run(8, 60.0, false),
        fuelled_run(11, 90.0, false),
    ];
    let aggregates = rollups(&sessions, &[]);
    assert_eq!(aggregates.gut_training_index, 2);
}

#[test]
fn test_custom_load_window() {
    let windows = RollupWindows {
        load_window_days: 3,
        hrv_baseline_days: 7,
    };
    let aggregates = compute_rollups(
        &[run(8, 10.0), run(7, 12.0)],
        &[],
        day(10),
        &windows,
        &FuelingThresholds::default(),
    );
    assert!((aggregates.rolling_mileage_km - 10.0).abs() < 1e-9);
}
