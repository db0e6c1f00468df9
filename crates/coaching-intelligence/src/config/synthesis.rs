// ABOUTME: Synthesis policy configuration for per-agent workout modifications
// ABOUTME: Duration fractions applied when an agent's AMBER or RED vote is honoured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// How synthesis reduces a workout for each triggering condition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisPolicy {
    /// Duration kept when the chassis-decay rule fires
    pub chassis_decay_duration_fraction: f64,
    /// Duration kept on a metabolic RED
    pub metabolic_red_duration_fraction: f64,
    /// Cap applied on a fueling RED (minutes)
    pub fueling_red_max_minutes: u32,
}

impl Default for SynthesisPolicy {
    fn default() -> Self {
        Self {
            chassis_decay_duration_fraction: 0.8,
            metabolic_red_duration_fraction: 0.6,
            fueling_red_max_minutes: 90,
        }
    }
}
