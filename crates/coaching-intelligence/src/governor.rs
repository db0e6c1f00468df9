// ABOUTME: Volume governor capping running volume by the strength-to-running integrity ratio
// ABOUTME: Tightens the cap on poor sleep and flags the elite double-days branch as advisory only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Volume Governor
//!
//! The integrity ratio (kg of strength tonnage per km run over the rolling
//! window) measures whether the chassis supports the engine. Below the floor,
//! today's distance is capped; poor sleep tightens the cap further.

use crate::config::GovernorThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Rolling aggregates the governor consumes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernorInput {
    /// Strength tonnage over the rolling window (kg)
    pub rolling_tonnage_kg: f64,
    /// Running distance over the rolling window (km)
    pub rolling_mileage_km: f64,
    /// Last night's sleep score, 0-100
    pub sleep_quality: Option<f64>,
    /// Distance planned for today (km)
    pub planned_distance_km: Option<f64>,
}

/// Which rule produced the cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BindingConstraint {
    /// No cap applied
    None,
    /// Integrity ratio below the safety floor
    IntegrityFloor,
    /// Poor sleep alone
    SleepQuality,
    /// Both the floor and poor sleep
    IntegrityAndSleep,
}

impl BindingConstraint {
    /// Whether a cap is in force
    #[must_use]
    pub const fn is_binding(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for BindingConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::IntegrityFloor => "integrity floor",
            Self::SleepQuality => "sleep quality",
            Self::IntegrityAndSleep => "integrity floor and sleep quality",
        })
    }
}

/// Governor output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeCap {
    /// Tonnage per running km
    pub integrity_ratio: f64,
    /// Fraction of planned volume allowed, in (0, 1]
    pub cap_fraction: f64,
    /// Planned distance after the cap; `None` when no distance was planned
    pub capped_distance_km: Option<f64>,
    /// Rule that produced the cap
    pub binding_constraint: BindingConstraint,
    /// Elite-volume recommendation; never applied automatically
    pub should_trigger_double_days: bool,
    /// Human-readable explanation naming the binding constraint
    pub reasoning: String,
}

impl VolumeCap {
    /// Whether the cap changes today's volume
    #[must_use]
    pub fn is_binding(&self) -> bool {
        self.binding_constraint.is_binding() && self.cap_fraction < 1.0
    }
}

/// Volume governor
#[derive(Debug, Clone, Default)]
pub struct VolumeGovernor {
    thresholds: GovernorThresholds,
}

impl VolumeGovernor {
    /// Create a governor with the given thresholds
    #[must_use]
    pub const fn new(thresholds: GovernorThresholds) -> Self {
        Self { thresholds }
    }

    /// Tonnage per km, guarding against zero mileage
    #[must_use]
    pub fn integrity_ratio(&self, tonnage_kg: f64, mileage_km: f64) -> f64 {
        let tonnage = if tonnage_kg.is_finite() {
            tonnage_kg.max(0.0)
        } else {
            0.0
        };
        let mileage = if mileage_km.is_finite() {
            mileage_km
        } else {
            0.0
        };
        tonnage / mileage.max(self.thresholds.epsilon_km)
    }

    /// Compute today's volume cap
    #[must_use]
    pub fn compute_cap(&self, input: &GovernorInput) -> VolumeCap {
        let t = &self.thresholds;
        let ratio = self.integrity_ratio(input.rolling_tonnage_kg, input.rolling_mileage_km);
        let sleep = input.sleep_quality.filter(|s| s.is_finite());

        let below_floor = ratio < t.integrity_floor;
        let poor_sleep = sleep.is_some_and(|s| s < t.poor_sleep_score);

        let mut cap_fraction = 1.0;
        let mut reasons = Vec::new();
        if below_floor {
            cap_fraction *= t.floor_cap_fraction;
            reasons.push(format!(
                "Integrity ratio {ratio:.1} kg/km is below the {:.0} kg/km floor: chassis is not supporting the engine, volume capped to {:.0}%",
                t.integrity_floor,
                t.floor_cap_fraction * 100.0
            ));
        }
        if let Some(score) = sleep.filter(|_| poor_sleep) {
            cap_fraction *= t.poor_sleep_cap_fraction;
            reasons.push(format!(
                "Sleep quality {score:.0} is below {:.0}: cap tightened by a further {:.0}%",
                t.poor_sleep_score,
                (1.0 - t.poor_sleep_cap_fraction) * 100.0
            ));
        }

        let binding_constraint = match (below_floor, poor_sleep) {
            (true, true) => BindingConstraint::IntegrityAndSleep,
            (true, false) => BindingConstraint::IntegrityFloor,
            (false, true) => BindingConstraint::SleepQuality,
            (false, false) => BindingConstraint::None,
        };

        let should_trigger_double_days = ratio >= t.excellent_integrity
            && sleep.is_some_and(|s| s >= t.excellent_sleep_score);

        if reasons.is_empty() {
            reasons.push(format!(
                "Integrity ratio {ratio:.1} kg/km meets the {:.0} kg/km floor: no volume cap",
                t.integrity_floor
            ));
        }
        if should_trigger_double_days {
            reasons.push(
                "Integrity and sleep are both excellent: double days may be considered (advisory)"
                    .to_owned(),
            );
        }

        let capped_distance_km = input
            .planned_distance_km
            .filter(|d| d.is_finite())
            .map(|d| d * cap_fraction);

        debug!(
            integrity_ratio = ratio,
            cap_fraction,
            binding = %binding_constraint,
            double_days = should_trigger_double_days,
            "Volume cap computed"
        );

        VolumeCap {
            integrity_ratio: ratio,
            cap_fraction,
            capped_distance_km,
            binding_constraint,
            should_trigger_double_days,
            reasoning: reasons.join(". "),
        }
    }
}
