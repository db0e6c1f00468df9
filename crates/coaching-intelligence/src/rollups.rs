// ABOUTME: Rolling aggregates built from session history and daily wellness records
// ABOUTME: Tonnage, mileage, strength recency, HRV baseline, sleep, and gut-training index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Rollups
//!
//! All windows are computed against an explicit `as_of` date so the same
//! history always yields the same aggregates. Records dated after `as_of`
//! are ignored.

use crate::config::{FuelingThresholds, RollupWindows};
use crate::derivation::mean;
use chrono::{Duration, NaiveDate};
use coaching_core::models::{HistoricalSession, WellnessDay, WorkoutType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregates feeding the agents and the governor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingAggregates {
    /// Date the aggregates describe
    pub as_of: NaiveDate,
    /// Strength tonnage over the load window (kg)
    pub rolling_tonnage_kg: f64,
    /// Running distance over the load window (km)
    pub rolling_mileage_km: f64,
    /// Days since the most recent strength session; `None` when none is recorded
    pub days_since_last_lift: Option<u32>,
    /// Mean HRV over the baseline window before `as_of`
    pub hrv_baseline_ms: Option<f64>,
    /// HRV reading on `as_of`
    pub current_hrv_ms: Option<f64>,
    /// Sleep score on `as_of`
    pub sleep_score: Option<f64>,
    /// Sessions fuelled at target carbs without GI distress
    pub gut_training_index: u32,
}

/// Build rolling aggregates as of a date
#[must_use]
pub fn compute_rollups(
    sessions: &[HistoricalSession],
    wellness: &[WellnessDay],
    as_of: NaiveDate,
    windows: &RollupWindows,
    fueling: &FuelingThresholds,
) -> RollingAggregates {
    let load_start = window_start(as_of, windows.load_window_days);
    let past: Vec<&HistoricalSession> = sessions.iter().filter(|s| s.date <= as_of).collect();

    let in_load_window = |s: &&&HistoricalSession| s.date >= load_start;
    let rolling_tonnage_kg: f64 = past
        .iter()
        .filter(in_load_window)
        .filter(|s| s.workout_type == WorkoutType::Strength)
        .filter_map(|s| s.tonnage_kg)
        .filter(|t| t.is_finite() && *t > 0.0)
        .sum();
    let rolling_mileage_km: f64 = past
        .iter()
        .filter(in_load_window)
        .filter(|s| s.workout_type == WorkoutType::Run)
        .filter_map(|s| s.distance_km)
        .filter(|d| d.is_finite() && *d > 0.0)
        .sum();

    let days_since_last_lift = past
        .iter()
        .filter(|s| s.workout_type == WorkoutType::Strength)
        .map(|s| s.date)
        .max()
        .map(|last| (as_of - last).num_days().max(0) as u32);

    let gut_training_index = past
        .iter()
        .filter(|s| {
            !s.gi_distress
                && s.carbs_per_hour_g
                    .is_some_and(|c| c >= fueling.gut_training_carbs_g_per_hr)
        })
        .count() as u32;

    let baseline_start = window_start(as_of, windows.hrv_baseline_days + 1);
    let baseline: Vec<f64> = wellness
        .iter()
        .filter(|d| d.date >= baseline_start && d.date < as_of)
        .filter_map(|d| d.hrv_ms)
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();
    let hrv_baseline_ms = mean(&baseline);

    let today = wellness.iter().find(|d| d.date == as_of);
    let current_hrv_ms = today.and_then(|d| d.hrv_ms).filter(|v| v.is_finite());
    let sleep_score = today.and_then(|d| d.sleep_score).filter(|v| v.is_finite());

    debug!(
        %as_of,
        tonnage_kg = rolling_tonnage_kg,
        mileage_km = rolling_mileage_km,
        days_since_last_lift = ?days_since_last_lift,
        gut_training_index,
        "Rollups computed"
    );

    RollingAggregates {
        as_of,
        rolling_tonnage_kg,
        rolling_mileage_km,
        days_since_last_lift,
        hrv_baseline_ms,
        current_hrv_ms,
        sleep_score,
        gut_training_index,
    }
}

/// First date of a window of `days` days ending on `as_of` (inclusive)
fn window_start(as_of: NaiveDate, days: u32) -> NaiveDate {
    as_of - Duration::days(i64::from(days.saturating_sub(1)))
}
