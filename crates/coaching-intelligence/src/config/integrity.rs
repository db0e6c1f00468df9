// ABOUTME: Sensor integrity and rollup window configuration
// ABOUTME: Thresholds for cadence lock, implausible HR, dropout, and flatline detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Session stream integrity thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrityThresholds {
    /// Lowest plausible heart rate (bpm)
    pub min_plausible_hr: f64,
    /// Highest plausible heart rate (bpm)
    pub max_plausible_hr: f64,
    /// Share of implausible HR points that rejects the session
    pub implausible_reject_fraction: f64,
    /// |HR - cadence| at or below which a point counts as cadence-locked (bpm)
    pub cadence_lock_tolerance: f64,
    /// Share of cadence-locked points that makes the session suspect
    pub cadence_lock_suspect_fraction: f64,
    /// Share of cadence-locked points that rejects the session
    pub cadence_lock_reject_fraction: f64,
    /// Share of points without HR that makes the session suspect
    pub dropout_suspect_fraction: f64,
    /// Consecutive identical HR samples that count as a flatline
    pub flatline_run_length: usize,
}

impl Default for IntegrityThresholds {
    fn default() -> Self {
        Self {
            min_plausible_hr: 30.0,
            max_plausible_hr: 230.0,
            implausible_reject_fraction: 0.05,
            cadence_lock_tolerance: 3.0,
            cadence_lock_suspect_fraction: 0.10,
            cadence_lock_reject_fraction: 0.30,
            dropout_suspect_fraction: 0.50,
            flatline_run_length: 60,
        }
    }
}

/// Trailing windows used by rollups
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RollupWindows {
    /// Window for tonnage and mileage sums (days, inclusive of `as_of`)
    pub load_window_days: u32,
    /// Window for the HRV baseline (days before `as_of`)
    pub hrv_baseline_days: u32,
}

impl Default for RollupWindows {
    fn default() -> Self {
        Self {
            load_window_days: 7,
            hrv_baseline_days: 7,
        }
    }
}
