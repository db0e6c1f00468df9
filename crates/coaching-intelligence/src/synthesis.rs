// ABOUTME: Synthesis and veto engine combining agent votes and the volume cap into one decision
// ABOUTME: Produces PROCEED, MODIFIED, or SKIPPED with a concrete final workout and modification log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Synthesis Engine
//!
//! Severity is the worst vote. A structural RED is a veto: severe pain skips
//! the session, otherwise the run becomes a no-impact ride. Any other AMBER or
//! RED vote modifies the planned workout with that agent's policy, and the
//! governor's cap is intersected with agent-driven trims (smaller wins).
//! During base building (phase 1) tempo and threshold work is moved to Z2, so
//! the final workout can always be executed without the trash-zone penalty.
//!
//! Failure is always closed: rejected data or an empty vote set returns an
//! error, never a PROCEED.

use crate::agents::structural::{LIFT_GAP_METRIC, NIGGLE_METRIC};
use crate::config::{CoachingConfig, SynthesisPolicy};
use crate::governor::VolumeCap;
use coaching_core::constants::adherence::BASE_PHASE_NUMBER;
use coaching_core::constants::structural::MAX_NIGGLE_SCORE;
use coaching_core::models::{
    AgentId, AgentVote, DecisionAction, DecisionResult, IntegrityStatus, TrainingZone, Vote,
    Workout, WorkoutConstraints, WorkoutSegment, WorkoutStructure, WorkoutType,
};
use coaching_core::{CoachError, CoachResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Cycle context the votes alone do not carry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisContext {
    /// Integrity of the session data behind the votes
    pub integrity_status: IntegrityStatus,
    /// Today's self-reported pain, 0-10
    pub niggle_score: f64,
    /// Training phase (1 = base)
    pub phase_number: u8,
    /// Weak links from the athlete profile, used for prehab notes
    #[serde(default)]
    pub structural_weaknesses: Vec<String>,
    /// Governor output for today
    #[serde(default)]
    pub volume_cap: Option<VolumeCap>,
}

/// Working state while modifications accumulate
struct Plan {
    workout: Workout,
    modifications: Vec<String>,
    duration_fraction: f64,
    zone_cap: Option<TrainingZone>,
    strip_intervals: bool,
    max_minutes: Option<u32>,
}

impl Plan {
    fn from_planned(planned: &Workout) -> Self {
        Self {
            workout: planned.clone(),
            modifications: Vec::new(),
            duration_fraction: 1.0,
            zone_cap: None,
            strip_intervals: false,
            max_minutes: None,
        }
    }

    fn cap_zone(&mut self, zone: TrainingZone) {
        self.zone_cap = Some(self.zone_cap.map_or(zone, |current| current.min(zone)));
    }

    fn trim_to(&mut self, fraction: f64) {
        self.duration_fraction = self.duration_fraction.min(fraction);
    }

    fn note(&mut self, note: String) {
        if !self.workout.notes.contains(&note) {
            self.workout.notes.push(note);
        }
    }
}

/// Synthesis and veto engine
#[derive(Debug, Clone)]
pub struct SynthesisEngine {
    severe_niggle: f64,
    fueling_target_g_per_hr: u32,
    policy: SynthesisPolicy,
}

impl Default for SynthesisEngine {
    fn default() -> Self {
        Self::new(&CoachingConfig::default())
    }
}

impl SynthesisEngine {
    /// Create an engine from the decision configuration
    #[must_use]
    pub fn new(config: &CoachingConfig) -> Self {
        Self {
            severe_niggle: config.structural.severe_niggle,
            fueling_target_g_per_hr: config.fueling.fueling_target_g_per_hr,
            policy: config.synthesis.clone(),
        }
    }

    /// Combine votes, the planned workout and the cap into one decision
    ///
    /// # Errors
    ///
    /// Returns `CoachError::IntegrityRejected` when the context's integrity
    /// status is REJECTED, and `CoachError::InvalidInput` when there are no
    /// votes.
    pub fn synthesize(
        &self,
        votes: &[AgentVote],
        planned: &Workout,
        context: &SynthesisContext,
    ) -> CoachResult<DecisionResult> {
        if context.integrity_status == IntegrityStatus::Rejected {
            warn!("Refusing to synthesize a decision from rejected session data");
            return Err(CoachError::integrity_rejected(
                "session data integrity status is REJECTED",
            ));
        }

        let Some(severity) = votes.iter().map(|v| v.vote).max() else {
            return Err(CoachError::invalid_input("no agent votes to synthesize"));
        };

        let niggle = if context.niggle_score.is_nan() {
            MAX_NIGGLE_SCORE
        } else {
            context.niggle_score
        };
        let structural_red = votes
            .iter()
            .any(|v| v.agent_id == AgentId::Structural && v.vote == Vote::Red);

        if structural_red && niggle >= self.severe_niggle {
            return Ok(self.skip(votes, planned, context, niggle));
        }

        let mut plan = Plan::from_planned(planned);
        if structural_red {
            Self::substitute(&mut plan, context);
        }

        for vote in votes.iter().filter(|v| v.vote > Vote::Green) {
            match vote.agent_id {
                AgentId::Structural if !structural_red => self.apply_structural(vote, &mut plan),
                AgentId::Structural => {}
                AgentId::Metabolic => self.apply_metabolic(vote, &mut plan),
                AgentId::Fueling => self.apply_fueling(vote, &mut plan),
            }
        }

        if context.phase_number == BASE_PHASE_NUMBER {
            Self::apply_base_phase(&mut plan);
        }
        Self::apply_adjustments(&mut plan, context.volume_cap.as_ref());

        let action = if severity > Vote::Green || !plan.modifications.is_empty() {
            DecisionAction::Modified
        } else {
            DecisionAction::Proceed
        };
        if action == DecisionAction::Modified && plan.modifications.is_empty() {
            plan.modifications
                .push(format!("Kept as planned under {severity} caution"));
        }

        let verdict = match action {
            DecisionAction::Proceed => "Verdict: PROCEED with the planned workout".to_owned(),
            _ => format!(
                "Verdict: {action} ({} change{})",
                plan.modifications.len(),
                if plan.modifications.len() == 1 { "" } else { "s" }
            ),
        };
        let reasoning = build_reasoning(votes, context, &verdict);

        info!(
            action = %action,
            severity = %severity,
            modifications = plan.modifications.len(),
            "Decision synthesized"
        );

        Ok(DecisionResult {
            action,
            final_workout: plan.workout,
            modifications: plan.modifications,
            reasoning,
            votes: votes.to_vec(),
        })
    }

    fn skip(
        &self,
        votes: &[AgentVote],
        planned: &Workout,
        context: &SynthesisContext,
        niggle: f64,
    ) -> DecisionResult {
        let mut rest = Workout::rest();
        rest.notes.push(format!(
            "Full rest: pain {niggle:.1} is at or above the severe threshold {:.1}",
            self.severe_niggle
        ));
        let verdict = "Verdict: SKIPPED, full rest".to_owned();

        info!(
            action = %DecisionAction::Skipped,
            niggle,
            "Decision synthesized"
        );

        DecisionResult {
            action: DecisionAction::Skipped,
            final_workout: rest,
            modifications: vec![format!(
                "Skipped planned {} session ({} min): full rest",
                planned.workout_type, planned.duration_minutes
            )],
            reasoning: build_reasoning(votes, context, &verdict),
            votes: votes.to_vec(),
        }
    }

    fn substitute(plan: &mut Plan, context: &SynthesisContext) {
        let planned = &plan.workout;
        let duration = planned.duration_minutes;
        let mut ride = Workout::new(WorkoutType::Bike, duration, None, TrainingZone::Z2Aerobic)
            .with_structure(WorkoutStructure {
                warmup: None,
                main_set: vec![WorkoutSegment::steady(
                    "Steady no-impact aerobic ride",
                    duration,
                    TrainingZone::Z2Aerobic,
                )],
                cooldown: None,
            })
            .with_constraints(WorkoutConstraints {
                fueling_target: planned.constraints.fueling_target,
                ..WorkoutConstraints::default()
            });
        ride.notes.clone_from(&planned.notes);

        plan.modifications.push(format!(
            "Substituted {} with a no-impact BIKE session at {} for {duration} min",
            planned.workout_type,
            TrainingZone::Z2Aerobic
        ));
        plan.workout = ride;

        if !context.structural_weaknesses.is_empty() {
            for weakness in &context.structural_weaknesses {
                plan.note(format!("Prehab: {weakness}"));
            }
            plan.modifications.push(format!(
                "Added prehab for {}",
                context.structural_weaknesses.join(", ")
            ));
        }
    }

    fn apply_structural(&self, vote: &AgentVote, plan: &mut Plan) {
        let chassis = vote.flagged(LIFT_GAP_METRIC);
        let pain = vote.flagged(NIGGLE_METRIC) || !chassis;
        if pain {
            plan.cap_zone(TrainingZone::Z2Aerobic);
            plan.strip_intervals = true;
        }
        if chassis {
            plan.note("Strength: complete a lift or prehab session before the next run".to_owned());
            plan.modifications
                .push("Added strength/prehab session to address chassis decay".to_owned());
            plan.trim_to(self.policy.chassis_decay_duration_fraction);
        }
    }

    fn apply_metabolic(&self, vote: &AgentVote, plan: &mut Plan) {
        if vote.vote == Vote::Red {
            plan.cap_zone(TrainingZone::Z1Recovery);
            plan.trim_to(self.policy.metabolic_red_duration_fraction);
        } else {
            plan.cap_zone(TrainingZone::Z2Aerobic);
        }
        plan.strip_intervals = true;
    }

    fn apply_fueling(&self, vote: &AgentVote, plan: &mut Plan) {
        let target = self.fueling_target_g_per_hr;
        if plan
            .workout
            .constraints
            .fueling_target
            .is_none_or(|current| current < target)
        {
            plan.workout.constraints.fueling_target = Some(target);
            plan.modifications
                .push(format!("Set fueling target to {target} g carbs/h"));
        }
        plan.note(format!("Fuel with {target} g carbs per hour from the first 30 min"));

        if vote.vote == Vote::Red {
            let max = self.policy.fueling_red_max_minutes;
            plan.max_minutes = Some(plan.max_minutes.map_or(max, |m| m.min(max)));
        }
    }

    fn apply_base_phase(plan: &mut Plan) {
        let workout = &mut plan.workout;
        let planned_zone = workout.primary_zone;
        let mut moved = planned_zone.is_trash_zone();
        if moved {
            workout.primary_zone = TrainingZone::Z2Aerobic;
        }
        for segment in &mut workout.structure.main_set {
            if segment.zone.is_trash_zone() {
                segment.zone = TrainingZone::Z2Aerobic;
                moved = true;
            }
        }
        if moved {
            debug!(planned_zone = %planned_zone, "Base phase: tempo/threshold work moved to Z2");
            plan.modifications.push(format!(
                "Base phase: moved tempo/threshold work to {}",
                TrainingZone::Z2Aerobic
            ));
        }
    }

    fn apply_adjustments(plan: &mut Plan, cap: Option<&VolumeCap>) {
        if let Some(zone) = plan.zone_cap {
            let current = plan.workout.primary_zone;
            if current > zone {
                plan.workout.primary_zone = zone;
                plan.modifications
                    .push(format!("Capped intensity at {zone} (was {current})"));
            }
        }

        if plan.strip_intervals && plan.workout.structure.has_intervals() {
            let zone = plan.zone_cap.unwrap_or(TrainingZone::Z2Aerobic);
            strip_intervals(&mut plan.workout.structure, zone);
            plan.modifications
                .push(format!("Stripped intervals to steady {zone}"));
        }

        let governor_fraction = cap
            .filter(|c| c.is_binding() && plan.workout.workout_type == WorkoutType::Run)
            .map(|c| (c.cap_fraction, c.binding_constraint));
        let (fraction, source) = match governor_fraction {
            Some((g, binding)) if g < plan.duration_fraction => {
                (g, format!("volume cap: {binding}"))
            }
            _ => (plan.duration_fraction, "agent policy".to_owned()),
        };
        if fraction < 1.0 {
            scale_volume(&mut plan.workout, fraction);
            plan.modifications.push(format!(
                "Trimmed volume to {:.0}% of plan ({source})",
                fraction * 100.0
            ));
        }

        if let Some(max) = plan.max_minutes {
            if plan.workout.duration_minutes > max {
                let original = plan.workout.duration_minutes;
                scale_volume(&mut plan.workout, f64::from(max) / f64::from(original));
                plan.workout.duration_minutes = max;
                plan.modifications
                    .push(format!("Capped duration at {max} min until the gut is trained"));
            }
        }
    }
}

fn strip_intervals(structure: &mut WorkoutStructure, zone: TrainingZone) {
    for segment in &mut structure.main_set {
        if segment.is_interval() {
            segment.duration_minutes = segment.duration_minutes.saturating_mul(segment.repetitions);
            segment.repetitions = 1;
            segment.description = format!("{} (steady)", segment.description);
        }
        segment.zone = segment.zone.min(zone);
    }
}

fn scale_minutes(minutes: u32, fraction: f64) -> u32 {
    (f64::from(minutes) * fraction).round() as u32
}

fn scale_volume(workout: &mut Workout, fraction: f64) {
    workout.duration_minutes = scale_minutes(workout.duration_minutes, fraction);
    workout.distance_km = workout.distance_km.map(|d| d * fraction);
    for segment in &mut workout.structure.main_set {
        segment.duration_minutes = scale_minutes(segment.duration_minutes, fraction);
    }
}

fn build_reasoning(votes: &[AgentVote], context: &SynthesisContext, verdict: &str) -> String {
    let mut parts: Vec<String> = votes
        .iter()
        .map(|v| format!("{} [{}]: {}", v.agent_id, v.vote, v.reason))
        .collect();

    if let Some(cap) = &context.volume_cap {
        parts.push(format!("Governor: {}", cap.reasoning));
    }
    if context.integrity_status == IntegrityStatus::Suspect {
        parts.push("Data integrity SUSPECT: treat sensor-derived metrics with caution".to_owned());
    }
    parts.push(verdict.to_owned());
    parts.join(" | ")
}
