// ABOUTME: Volume governor configuration for integrity-ratio based distance caps
// ABOUTME: Configures the chassis safety floor, sleep tightening, and the double-days branch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Volume governor thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernorThresholds {
    /// Mileage floor used as the ratio denominator (km)
    pub epsilon_km: f64,
    /// Integrity ratio below which distance is capped (kg per km)
    pub integrity_floor: f64,
    /// Integrity ratio considered elite (kg per km)
    pub excellent_integrity: f64,
    /// Fraction of planned distance allowed below the floor
    pub floor_cap_fraction: f64,
    /// Sleep score below which the cap tightens
    pub poor_sleep_score: f64,
    /// Multiplier applied for poor sleep
    pub poor_sleep_cap_fraction: f64,
    /// Sleep score considered excellent
    pub excellent_sleep_score: f64,
}

impl Default for GovernorThresholds {
    fn default() -> Self {
        Self {
            epsilon_km: 1.0,
            integrity_floor: 50.0,
            excellent_integrity: 150.0,
            floor_cap_fraction: 0.7,
            poor_sleep_score: 60.0,
            poor_sleep_cap_fraction: 0.85,
            excellent_sleep_score: 85.0,
        }
    }
}
