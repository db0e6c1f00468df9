// ABOUTME: Decision pipeline chaining integrity, derivation, agents, governor, and synthesis
// ABOUTME: Evaluates single cycles or replays many cycles in parallel for backtesting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Decision Pipeline
//!
//! One call to [`DecisionEngine::evaluate`] is one decision cycle:
//!
//! 1. classify the session stream (REJECTED stops the cycle),
//! 2. derive durability, economy and red-zone time,
//! 3. collect the three agent votes,
//! 4. compute the volume cap,
//! 5. synthesize the decision.
//!
//! Every step is pure, so replaying cycles in parallel gives the same
//! results as replaying them one by one.

use crate::agents::{
    Agent, FuelingAgent, FuelingInput, MetabolicAgent, MetabolicInput, StructuralAgent,
    StructuralInput,
};
use crate::config::{CoachingConfig, ConfigError};
use crate::derivation::{calculate_durability, calculate_economy, time_in_red_zone_minutes};
use crate::governor::{GovernorInput, VolumeCap, VolumeGovernor};
use crate::integrity::{IntegrityClassifier, IntegrityReport};
use crate::rollups::RollingAggregates;
use crate::synthesis::{SynthesisContext, SynthesisEngine};
use coaching_core::models::{
    AgentVote, DecisionResult, DurabilityMetrics, EconomyInput, EconomyMetrics, IntegrityStatus,
    PhenotypeProfile, SessionDataPoint, Workout, WorkoutType,
};
use coaching_core::{CoachError, CoachResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Everything one decision cycle needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionInput {
    /// Workout planned for today
    pub planned_workout: Workout,
    /// Most recent session stream
    #[serde(default)]
    pub session_points: Vec<SessionDataPoint>,
    /// Summary of the most recent session for economy ratios
    #[serde(default)]
    pub session_summary: EconomyInput,
    /// Athlete profile
    #[serde(default)]
    pub profile: PhenotypeProfile,
    /// Today's self-reported pain, 0-10
    pub niggle_score: f64,
    /// Training phase (1 = base)
    pub phase_number: u8,
    /// Rolling aggregates as of today
    pub aggregates: RollingAggregates,
    /// Red-zone minutes already spent this week before the recent session
    #[serde(default)]
    pub prior_red_zone_min: f64,
    /// Red-zone minutes the plan allows this week
    pub plan_limit_red_zone_min: f64,
}

/// Result of one decision cycle with the intermediate metrics behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    /// Synthesized decision
    pub decision: DecisionResult,
    /// Integrity classification of the session stream
    pub integrity: IntegrityReport,
    /// Durability metrics of the session stream
    pub durability: DurabilityMetrics,
    /// Economy ratios of the session summary
    pub economy: EconomyMetrics,
    /// Red-zone minutes this week including the recent session
    pub time_in_red_zone_min: f64,
    /// Governor output
    pub volume_cap: VolumeCap,
}

/// Multi-agent decision engine
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: CoachingConfig,
    classifier: IntegrityClassifier,
    metabolic: MetabolicAgent,
    fueling: FuelingAgent,
    governor: VolumeGovernor,
    synthesis: SynthesisEngine,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::build(CoachingConfig::default())
    }
}

impl DecisionEngine {
    /// Create an engine with the canonical threshold table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration fails validation.
    pub fn with_config(config: CoachingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CoachingConfig) -> Self {
        Self {
            classifier: IntegrityClassifier::new(config.integrity.clone()),
            metabolic: MetabolicAgent::new(config.metabolic.clone()),
            fueling: FuelingAgent::new(config.fueling.clone()),
            governor: VolumeGovernor::new(config.governor.clone()),
            synthesis: SynthesisEngine::new(&config),
            config,
        }
    }

    /// Thresholds in force
    #[must_use]
    pub const fn config(&self) -> &CoachingConfig {
        &self.config
    }

    /// Run one decision cycle
    ///
    /// # Errors
    ///
    /// Returns `CoachError::IntegrityRejected` when the session stream fails
    /// integrity checks and `CoachError::InvalidProfile` when red-zone time is
    /// needed but the profile has neither an anaerobic floor nor a max HR.
    pub fn evaluate(&self, input: &DecisionInput) -> CoachResult<DecisionReport> {
        let integrity = self.classifier.classify(&input.session_points);
        if integrity.status == IntegrityStatus::Rejected {
            return Err(CoachError::integrity_rejected(integrity.summary()));
        }

        let durability = calculate_durability(&input.session_points);
        let economy = calculate_economy(&input.session_summary);
        let session_red_zone = if input.session_points.iter().any(|p| p.heart_rate.is_some()) {
            time_in_red_zone_minutes(&input.session_points, &input.profile).inspect_err(|e| {
                warn!(error = %e, "Cannot derive red-zone time");
            })?
        } else {
            0.0
        };
        let time_in_red_zone_min = input.prior_red_zone_min.max(0.0) + session_red_zone;

        let votes = self.collect_votes(input, &durability, time_in_red_zone_min);
        let volume_cap = self.governor.compute_cap(&GovernorInput {
            rolling_tonnage_kg: input.aggregates.rolling_tonnage_kg,
            rolling_mileage_km: input.aggregates.rolling_mileage_km,
            sleep_quality: input.aggregates.sleep_score,
            planned_distance_km: input.planned_workout.distance_km,
        });

        let context = SynthesisContext {
            integrity_status: integrity.status,
            niggle_score: input.niggle_score,
            phase_number: input.phase_number,
            structural_weaknesses: input.profile.structural_weaknesses.clone(),
            volume_cap: Some(volume_cap.clone()),
        };
        let decision = self
            .synthesis
            .synthesize(&votes, &input.planned_workout, &context)?;

        debug!(
            action = %decision.action,
            decoupling = ?durability.decoupling,
            integrity = %integrity.status,
            "Decision cycle complete"
        );

        Ok(DecisionReport {
            decision,
            integrity,
            durability,
            economy,
            time_in_red_zone_min,
            volume_cap,
        })
    }

    /// Evaluate many independent cycles in parallel, preserving input order
    ///
    /// Each cycle keeps its own error; one failing cycle does not stop the others.
    #[must_use]
    pub fn replay(&self, inputs: &[DecisionInput]) -> Vec<CoachResult<DecisionReport>> {
        inputs.par_iter().map(|input| self.evaluate(input)).collect()
    }

    fn collect_votes(
        &self,
        input: &DecisionInput,
        durability: &DurabilityMetrics,
        time_in_red_zone_min: f64,
    ) -> Vec<AgentVote> {
        let structural = StructuralAgent::new(self.config.structural.clone())
            .with_profile(&input.profile);
        let aggregates = &input.aggregates;

        let next_run_duration_min = if input.planned_workout.workout_type == WorkoutType::Run {
            input.planned_workout.duration_minutes
        } else {
            0
        };

        vec![
            structural.evaluate(&StructuralInput {
                niggle_score: input.niggle_score,
                days_since_last_lift: aggregates.days_since_last_lift,
            }),
            self.metabolic.evaluate(&MetabolicInput {
                aerobic_decoupling_pct: durability.decoupling.map(|d| d * 100.0),
                time_in_red_zone_min,
                plan_limit_red_zone_min: input.plan_limit_red_zone_min,
                hrv_baseline_ms: aggregates.hrv_baseline_ms,
                current_hrv_ms: aggregates.current_hrv_ms,
            }),
            self.fueling.evaluate(&FuelingInput {
                gut_training_index: aggregates.gut_training_index,
                next_run_duration_min,
            }),
        ]
    }
}
