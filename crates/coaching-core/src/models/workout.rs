// ABOUTME: Workout prescription model with modality, zone, structure, and constraints
// ABOUTME: Planned workouts are inputs; synthesis produces a final workout that may differ
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    /// Running (impact)
    Run,
    /// Cycling (no impact)
    Bike,
    /// Strength training
    Strength,
    /// Anything else, including full rest
    Other,
}

impl WorkoutType {
    /// Whether the modality loads the chassis with ground impact
    #[must_use]
    pub const fn is_impact(self) -> bool {
        matches!(self, Self::Run)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Run => "RUN",
            Self::Bike => "BIKE",
            Self::Strength => "STRENGTH",
            Self::Other => "OTHER",
        })
    }
}

/// Five-zone intensity model; ordering is intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingZone {
    /// Zone 1 - recovery
    Z1Recovery,
    /// Zone 2 - aerobic base
    Z2Aerobic,
    /// Zone 3 - tempo
    Z3Tempo,
    /// Zone 4 - threshold
    Z4Threshold,
    /// Zone 5 - VO2max
    Z5Vo2Max,
}

impl TrainingZone {
    /// Tempo or threshold: the "grey" intensities that stall base building
    #[must_use]
    pub const fn is_trash_zone(self) -> bool {
        matches!(self, Self::Z3Tempo | Self::Z4Threshold)
    }
}

impl fmt::Display for TrainingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Z1Recovery => "Z1_RECOVERY",
            Self::Z2Aerobic => "Z2_AEROBIC",
            Self::Z3Tempo => "Z3_TEMPO",
            Self::Z4Threshold => "Z4_THRESHOLD",
            Self::Z5Vo2Max => "Z5_VO2_MAX",
        })
    }
}

/// One block of the main set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSegment {
    /// Free-text description ("6 x 800m")
    pub description: String,
    /// Duration of one repetition (minutes)
    pub duration_minutes: u32,
    /// Target zone
    pub zone: TrainingZone,
    /// Number of repetitions
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
}

const fn default_repetitions() -> u32 {
    1
}

impl WorkoutSegment {
    /// Create a single-repetition segment
    #[must_use]
    pub fn steady(description: impl Into<String>, duration_minutes: u32, zone: TrainingZone) -> Self {
        Self {
            description: description.into(),
            duration_minutes,
            zone,
            repetitions: 1,
        }
    }

    /// Whether this segment is interval work
    #[must_use]
    pub fn is_interval(&self) -> bool {
        self.zone >= TrainingZone::Z3Tempo || self.repetitions > 1
    }
}

/// Warmup, main set, cooldown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStructure {
    /// Warmup description
    #[serde(default)]
    pub warmup: Option<String>,
    /// Main set blocks
    #[serde(default)]
    pub main_set: Vec<WorkoutSegment>,
    /// Cooldown description
    #[serde(default)]
    pub cooldown: Option<String>,
}

impl WorkoutStructure {
    /// Whether any main-set block is interval work
    #[must_use]
    pub fn has_intervals(&self) -> bool {
        self.main_set.iter().any(WorkoutSegment::is_interval)
    }
}

/// Execution constraints attached to a workout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutConstraints {
    /// Heart rate ceiling (bpm)
    #[serde(default)]
    pub hr_target: Option<u32>,
    /// Cadence target (spm)
    #[serde(default)]
    pub cadence_target: Option<u32>,
    /// Carbohydrate intake target (g/h)
    #[serde(default)]
    pub fueling_target: Option<u32>,
}

/// A workout prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Modality
    pub workout_type: WorkoutType,
    /// Total duration (minutes)
    pub duration_minutes: u32,
    /// Distance (km) when the modality has one
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Dominant intensity
    pub primary_zone: TrainingZone,
    /// Session structure
    #[serde(default)]
    pub structure: WorkoutStructure,
    /// Execution constraints
    #[serde(default)]
    pub constraints: WorkoutConstraints,
    /// Prehab and nutrition annotations added by synthesis
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Workout {
    /// Create a workout with empty structure, constraints and notes
    #[must_use]
    pub const fn new(
        workout_type: WorkoutType,
        duration_minutes: u32,
        distance_km: Option<f64>,
        primary_zone: TrainingZone,
    ) -> Self {
        Self {
            workout_type,
            duration_minutes,
            distance_km,
            primary_zone,
            structure: WorkoutStructure {
                warmup: None,
                main_set: Vec::new(),
                cooldown: None,
            },
            constraints: WorkoutConstraints {
                hr_target: None,
                cadence_target: None,
                fueling_target: None,
            },
            notes: Vec::new(),
        }
    }

    /// Full-rest prescription
    #[must_use]
    pub fn rest() -> Self {
        Self::new(WorkoutType::Other, 0, None, TrainingZone::Z1Recovery)
    }

    /// Attach a structure
    #[must_use]
    pub fn with_structure(mut self, structure: WorkoutStructure) -> Self {
        self.structure = structure;
        self
    }

    /// Attach constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: WorkoutConstraints) -> Self {
        self.constraints = constraints;
        self
    }
}
