// ABOUTME: Athlete phenotype profile with personal physiological thresholds
// ABOUTME: Read-only input to evaluators; only explicit settings updates change it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Athlete-specific thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhenotypeProfile {
    /// Maximum heart rate override (bpm)
    #[serde(default)]
    pub max_hr: Option<u32>,
    /// Heart rate above which effort is anaerobic (bpm)
    #[serde(default)]
    pub anaerobic_floor_hr: Option<u32>,
    /// Known structural weak points ("left achilles", "right ITB")
    #[serde(default)]
    pub structural_weaknesses: Vec<String>,
    /// Strength sessions required per week
    #[serde(default = "default_lift_days")]
    pub lift_days_required: u32,
    /// Personal niggle threshold; can only tighten the amber band
    #[serde(default = "default_niggle_threshold")]
    pub niggle_threshold: f64,
}

const fn default_lift_days() -> u32 {
    2
}

const fn default_niggle_threshold() -> f64 {
    3.0
}

impl Default for PhenotypeProfile {
    fn default() -> Self {
        Self {
            max_hr: None,
            anaerobic_floor_hr: None,
            structural_weaknesses: Vec::new(),
            lift_days_required: default_lift_days(),
            niggle_threshold: default_niggle_threshold(),
        }
    }
}
