// ABOUTME: Agent threshold configuration for the Structural, Metabolic, and Fueling evaluators
// ABOUTME: Defaults hold the canonical threshold table shared by every evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Agent Threshold Configuration
//!
//! The hard pain veto (niggle >= 5) is deliberately absent: it is a constant in
//! `coaching_core::constants::structural` and cannot be configured.

use serde::{Deserialize, Serialize};

/// Structural ("chassis") agent thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralThresholds {
    /// Niggle score at which intensity is capped (AMBER)
    pub amber_niggle: f64,
    /// Niggle score at which the session is shut down entirely instead of substituted
    pub severe_niggle: f64,
    /// Days without lifting after which the chassis is considered decaying (AMBER)
    pub chassis_decay_days: u32,
    /// Days without lifting after which the chassis veto fires (RED)
    pub chassis_collapse_days: u32,
}

impl Default for StructuralThresholds {
    fn default() -> Self {
        Self {
            amber_niggle: 3.0,
            severe_niggle: 7.0,
            chassis_decay_days: 5,
            chassis_collapse_days: 14,
        }
    }
}

/// Metabolic ("engine") agent thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetabolicThresholds {
    /// Decoupling above which intervals are stripped (percent)
    pub decoupling_amber_pct: f64,
    /// Decoupling above which the engine veto fires (percent)
    pub decoupling_red_pct: f64,
    /// HRV drop below baseline that counts as suppressed (percent)
    pub hrv_suppression_pct: f64,
    /// Multiplier applied to every metabolic limit when HRV is suppressed
    pub hrv_tightening_factor: f64,
}

impl Default for MetabolicThresholds {
    fn default() -> Self {
        Self {
            decoupling_amber_pct: 5.0,
            decoupling_red_pct: 10.0,
            hrv_suppression_pct: 10.0,
            hrv_tightening_factor: 0.75,
        }
    }
}

/// Fueling agent thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelingThresholds {
    /// Runs longer than this need fueling conditioning (minutes)
    pub long_run_minutes: u32,
    /// Runs longer than this need full conditioning or they are vetoed (minutes)
    pub very_long_run_minutes: u32,
    /// Gut-training sessions that count as conditioned
    pub adequate_gut_index: u32,
    /// Gut-training sessions below which any long run is vetoed
    pub minimum_gut_index: u32,
    /// Carbohydrate rate that counts as a gut-training session (g/h)
    pub gut_training_carbs_g_per_hr: f64,
    /// Carbohydrate target prescribed on long runs (g/h)
    pub fueling_target_g_per_hr: u32,
}

impl Default for FuelingThresholds {
    fn default() -> Self {
        Self {
            long_run_minutes: 90,
            very_long_run_minutes: 150,
            adequate_gut_index: 3,
            minimum_gut_index: 1,
            gut_training_carbs_g_per_hr: 60.0,
            fueling_target_g_per_hr: 60,
        }
    }
}
