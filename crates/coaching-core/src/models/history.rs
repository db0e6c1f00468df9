// ABOUTME: Historical session and daily wellness records used to build rolling aggregates
// ABOUTME: Supplied by the persistence collaborator; the core never queries storage itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed session from history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSession {
    /// Local calendar date of the session
    pub date: NaiveDate,
    /// Modality
    pub workout_type: WorkoutType,
    /// Distance covered (km)
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Strength load, weight x reps (kg)
    #[serde(default)]
    pub tonnage_kg: Option<f64>,
    /// Carbohydrate intake rate (g/h)
    #[serde(default)]
    pub carbs_per_hour_g: Option<f64>,
    /// Whether the athlete reported GI distress
    #[serde(default)]
    pub gi_distress: bool,
}

/// One day of wellness data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Average overnight HRV (ms)
    #[serde(default)]
    pub hrv_ms: Option<f64>,
    /// Resting heart rate (bpm)
    #[serde(default)]
    pub resting_hr: Option<f64>,
    /// Total sleep (seconds)
    #[serde(default)]
    pub sleep_seconds: Option<u32>,
    /// Overall sleep score (0-100)
    #[serde(default)]
    pub sleep_score: Option<f64>,
}
