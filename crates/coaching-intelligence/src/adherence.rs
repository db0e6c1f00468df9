// ABOUTME: Post-hoc adherence scoring of an executed session against its prescription
// ABOUTME: Rewards valid substitutions, penalizes lazy misses and base-phase tempo work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Adherence Scorer
//!
//! Rules apply in precedence order: a valid substitution scores 100, a miss
//! scores 0, base-phase tempo/threshold work scores -50, an exact zone match
//! scores 100 and anything else executed scores 75. Score values are fixed
//! policy in `coaching_core::constants::adherence` so historical scores stay
//! comparable.

use coaching_core::constants::adherence::{
    BASE_PHASE_NUMBER, EXACT_MATCH_SCORE, LAZY_MISS_SCORE, PARTIAL_CREDIT_SCORE,
    TRASH_ZONE_PENALTY_SCORE, VALID_SUBSTITUTION_SCORE,
};
use coaching_core::models::{AdherenceScore, TrainingZone, Workout};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the athlete actually did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Zone the session was executed in; `None` when unknown or missed
    pub actual_zone: Option<TrainingZone>,
    /// No session was recorded
    pub was_missed: bool,
    /// The athlete followed a prescribed substitution instead
    pub was_valid_substitution: bool,
}

/// Score one session against its prescription
#[must_use]
pub fn score_adherence(
    planned: &Workout,
    actual_zone: Option<TrainingZone>,
    was_missed: bool,
    was_valid_substitution: bool,
    phase_number: u8,
) -> AdherenceScore {
    let score = if was_valid_substitution {
        AdherenceScore {
            score: VALID_SUBSTITUTION_SCORE,
            reason: "Valid substitution: prescribed alternative completed".to_owned(),
            penalty_applied: false,
        }
    } else if was_missed {
        AdherenceScore {
            score: LAZY_MISS_SCORE,
            reason: "Lazy Miss: session skipped without a valid substitution".to_owned(),
            penalty_applied: false,
        }
    } else {
        score_executed(planned.primary_zone, actual_zone, phase_number)
    };

    debug!(
        score = score.score,
        penalty = score.penalty_applied,
        planned_zone = %planned.primary_zone,
        actual_zone = ?actual_zone,
        "Adherence scored"
    );
    score
}

/// Score a session from a [`SessionOutcome`]
#[must_use]
pub fn score_outcome(planned: &Workout, outcome: &SessionOutcome, phase_number: u8) -> AdherenceScore {
    score_adherence(
        planned,
        outcome.actual_zone,
        outcome.was_missed,
        outcome.was_valid_substitution,
        phase_number,
    )
}

fn score_executed(
    planned_zone: TrainingZone,
    actual_zone: Option<TrainingZone>,
    phase_number: u8,
) -> AdherenceScore {
    match actual_zone {
        Some(zone) if phase_number == BASE_PHASE_NUMBER && zone.is_trash_zone() => AdherenceScore {
            score: TRASH_ZONE_PENALTY_SCORE,
            reason: format!(
                "Trash zone: {zone} during base building (phase {BASE_PHASE_NUMBER})"
            ),
            penalty_applied: true,
        },
        Some(zone) if zone == planned_zone => AdherenceScore {
            score: EXACT_MATCH_SCORE,
            reason: format!("Executed as prescribed in {zone}"),
            penalty_applied: false,
        },
        Some(zone) => AdherenceScore {
            score: PARTIAL_CREDIT_SCORE,
            reason: format!("Executed in {zone} instead of {planned_zone}"),
            penalty_applied: false,
        },
        None => AdherenceScore {
            score: PARTIAL_CREDIT_SCORE,
            reason: "Executed, zone unknown".to_owned(),
            penalty_applied: false,
        },
    }
}
