// ABOUTME: Decision threshold configuration for the coaching engine
// ABOUTME: Orchestrates component configs and provides unified validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching Configuration Module
//!
//! Type-safe threshold tables for every decision component. The core never
//! reads configuration from the environment or a global: callers build a
//! `CoachingConfig` (usually `Default`, optionally with environment overrides
//! applied by the outer crate), validate it, and hand it to the engine.
//!
//! # Module Structure
//!
//! - `agents` - Structural, Metabolic and Fueling thresholds
//! - `governor` - Integrity-ratio floor and sleep tightening
//! - `synthesis` - Per-agent modification fractions
//! - `integrity` - Sensor integrity checks and rollup windows

pub mod agents;
pub mod error;
pub mod governor;
pub mod integrity;
pub mod synthesis;

pub use agents::{FuelingThresholds, MetabolicThresholds, StructuralThresholds};
pub use error::ConfigError;
pub use governor::GovernorThresholds;
pub use integrity::{IntegrityThresholds, RollupWindows};
pub use synthesis::SynthesisPolicy;

use coaching_core::constants::structural::{HARD_PAIN_VETO_NIGGLE, MAX_NIGGLE_SCORE};
use serde::{Deserialize, Serialize};

/// Complete threshold configuration for one engine instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachingConfig {
    /// Structural agent thresholds
    #[serde(default)]
    pub structural: StructuralThresholds,
    /// Metabolic agent thresholds
    #[serde(default)]
    pub metabolic: MetabolicThresholds,
    /// Fueling agent thresholds
    #[serde(default)]
    pub fueling: FuelingThresholds,
    /// Volume governor thresholds
    #[serde(default)]
    pub governor: GovernorThresholds,
    /// Synthesis modification policy
    #[serde(default)]
    pub synthesis: SynthesisPolicy,
    /// Session integrity thresholds
    #[serde(default)]
    pub integrity: IntegrityThresholds,
    /// Rollup windows
    #[serde(default)]
    pub rollups: RollupWindows,
}

impl CoachingConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a threshold is NaN or infinite, when
    /// thresholds are out of order, or when a fraction falls outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN compares false against everything, so ordering checks alone pass it
        self.validate_finite()?;
        self.validate_structural()?;
        self.validate_metabolic()?;
        self.validate_fueling()?;
        self.validate_governor()?;
        self.validate_synthesis()?;
        self.validate_integrity()
    }

    fn validate_finite(&self) -> Result<(), ConfigError> {
        let values = [
            ("structural.amber_niggle", self.structural.amber_niggle),
            ("structural.severe_niggle", self.structural.severe_niggle),
            ("metabolic.decoupling_amber_pct", self.metabolic.decoupling_amber_pct),
            ("metabolic.decoupling_red_pct", self.metabolic.decoupling_red_pct),
            ("metabolic.hrv_suppression_pct", self.metabolic.hrv_suppression_pct),
            ("metabolic.hrv_tightening_factor", self.metabolic.hrv_tightening_factor),
            ("fueling.gut_training_carbs_g_per_hr", self.fueling.gut_training_carbs_g_per_hr),
            ("governor.epsilon_km", self.governor.epsilon_km),
            ("governor.integrity_floor", self.governor.integrity_floor),
            ("governor.excellent_integrity", self.governor.excellent_integrity),
            ("governor.floor_cap_fraction", self.governor.floor_cap_fraction),
            ("governor.poor_sleep_score", self.governor.poor_sleep_score),
            ("governor.poor_sleep_cap_fraction", self.governor.poor_sleep_cap_fraction),
            ("governor.excellent_sleep_score", self.governor.excellent_sleep_score),
            (
                "synthesis.chassis_decay_duration_fraction",
                self.synthesis.chassis_decay_duration_fraction,
            ),
            (
                "synthesis.metabolic_red_duration_fraction",
                self.synthesis.metabolic_red_duration_fraction,
            ),
            ("integrity.min_plausible_hr", self.integrity.min_plausible_hr),
            ("integrity.max_plausible_hr", self.integrity.max_plausible_hr),
            ("integrity.implausible_reject_fraction", self.integrity.implausible_reject_fraction),
            ("integrity.cadence_lock_tolerance", self.integrity.cadence_lock_tolerance),
            (
                "integrity.cadence_lock_suspect_fraction",
                self.integrity.cadence_lock_suspect_fraction,
            ),
            ("integrity.cadence_lock_reject_fraction", self.integrity.cadence_lock_reject_fraction),
            ("integrity.dropout_suspect_fraction", self.integrity.dropout_suspect_fraction),
        ];
        for &(name, value) in &values {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        Ok(())
    }

    fn validate_structural(&self) -> Result<(), ConfigError> {
        let s = &self.structural;
        if !(0.0..HARD_PAIN_VETO_NIGGLE).contains(&s.amber_niggle) {
            return Err(ConfigError::InvalidRange(
                "structural amber_niggle must be in [0, hard pain veto)",
            ));
        }
        if s.severe_niggle < HARD_PAIN_VETO_NIGGLE || s.severe_niggle > MAX_NIGGLE_SCORE {
            return Err(ConfigError::InvalidRange(
                "structural severe_niggle must be in [hard pain veto, 10]",
            ));
        }
        if s.chassis_decay_days >= s.chassis_collapse_days {
            return Err(ConfigError::InvalidRange(
                "chassis_decay_days must be < chassis_collapse_days",
            ));
        }
        Ok(())
    }

    fn validate_metabolic(&self) -> Result<(), ConfigError> {
        let m = &self.metabolic;
        if m.decoupling_amber_pct <= 0.0 || m.decoupling_amber_pct >= m.decoupling_red_pct {
            return Err(ConfigError::InvalidRange(
                "decoupling_amber_pct must be > 0 and < decoupling_red_pct",
            ));
        }
        if !(0.0..=100.0).contains(&m.hrv_suppression_pct) {
            return Err(ConfigError::ValueOutOfRange(
                "hrv_suppression_pct must be in [0, 100]",
            ));
        }
        check_fraction(m.hrv_tightening_factor, "hrv_tightening_factor")
    }

    fn validate_fueling(&self) -> Result<(), ConfigError> {
        let f = &self.fueling;
        if f.long_run_minutes >= f.very_long_run_minutes {
            return Err(ConfigError::InvalidRange(
                "long_run_minutes must be < very_long_run_minutes",
            ));
        }
        if f.minimum_gut_index > f.adequate_gut_index {
            return Err(ConfigError::InvalidRange(
                "minimum_gut_index must be <= adequate_gut_index",
            ));
        }
        if f.gut_training_carbs_g_per_hr <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "gut_training_carbs_g_per_hr must be positive",
            ));
        }
        Ok(())
    }

    fn validate_governor(&self) -> Result<(), ConfigError> {
        let g = &self.governor;
        if g.epsilon_km <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("epsilon_km must be positive"));
        }
        if g.integrity_floor < 0.0 || g.integrity_floor >= g.excellent_integrity {
            return Err(ConfigError::InvalidRange(
                "integrity_floor must be >= 0 and < excellent_integrity",
            ));
        }
        if g.poor_sleep_score >= g.excellent_sleep_score {
            return Err(ConfigError::InvalidRange(
                "poor_sleep_score must be < excellent_sleep_score",
            ));
        }
        check_fraction(g.floor_cap_fraction, "floor_cap_fraction")?;
        check_fraction(g.poor_sleep_cap_fraction, "poor_sleep_cap_fraction")
    }

    fn validate_synthesis(&self) -> Result<(), ConfigError> {
        let p = &self.synthesis;
        check_fraction(
            p.chassis_decay_duration_fraction,
            "chassis_decay_duration_fraction",
        )?;
        check_fraction(
            p.metabolic_red_duration_fraction,
            "metabolic_red_duration_fraction",
        )?;
        if p.fueling_red_max_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fueling_red_max_minutes must be positive",
            ));
        }
        Ok(())
    }

    fn validate_integrity(&self) -> Result<(), ConfigError> {
        let i = &self.integrity;
        if i.min_plausible_hr >= i.max_plausible_hr {
            return Err(ConfigError::InvalidRange(
                "min_plausible_hr must be < max_plausible_hr",
            ));
        }
        if i.cadence_lock_suspect_fraction >= i.cadence_lock_reject_fraction {
            return Err(ConfigError::InvalidRange(
                "cadence_lock_suspect_fraction must be < cadence_lock_reject_fraction",
            ));
        }
        check_fraction(i.implausible_reject_fraction, "implausible_reject_fraction")?;
        check_fraction(i.dropout_suspect_fraction, "dropout_suspect_fraction")?;
        if i.flatline_run_length < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "flatline_run_length must be at least 2",
            ));
        }
        if self.rollups.load_window_days == 0 || self.rollups.hrv_baseline_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "rollup windows must be at least one day",
            ));
        }
        Ok(())
    }
}

fn check_fraction(value: f64, name: &'static str) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFraction(name))
    }
}
