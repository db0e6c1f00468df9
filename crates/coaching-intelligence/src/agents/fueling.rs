// ABOUTME: Fueling agent checking gut training against the next long run
// ABOUTME: Short runs are always GREEN; long runs need a trained gut
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Agent;
use crate::config::FuelingThresholds;
use coaching_core::constants::confidence::OBJECTIVE_DATA;
use coaching_core::models::{AgentId, AgentVote, FlaggedMetric, Vote};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Metric name flagged when gut training is insufficient
pub const GUT_INDEX_METRIC: &str = "gut_training_index";

/// Inputs for one fueling evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelingInput {
    /// Recent sessions fuelled at target carbs without GI distress
    pub gut_training_index: u32,
    /// Duration of the next planned run (minutes)
    pub next_run_duration_min: u32,
}

/// Fueling agent
#[derive(Debug, Clone, Default)]
pub struct FuelingAgent {
    thresholds: FuelingThresholds,
}

impl FuelingAgent {
    /// Create an agent with the given thresholds
    #[must_use]
    pub const fn new(thresholds: FuelingThresholds) -> Self {
        Self { thresholds }
    }
}

impl Agent for FuelingAgent {
    type Input = FuelingInput;

    fn id(&self) -> AgentId {
        AgentId::Fueling
    }

    fn evaluate(&self, input: &FuelingInput) -> AgentVote {
        let t = &self.thresholds;
        let index = input.gut_training_index;
        let duration = input.next_run_duration_min;

        let (vote, reason, threshold) = if duration <= t.long_run_minutes {
            (
                Vote::Green,
                format!("Run of {duration} min needs no fueling plan"),
                None,
            )
        } else if index < t.minimum_gut_index {
            (
                Vote::Red,
                format!("Gut untrained (index {index}) for a {duration} min run"),
                Some(t.minimum_gut_index),
            )
        } else if index < t.adequate_gut_index && duration > t.very_long_run_minutes {
            (
                Vote::Red,
                format!(
                    "Gut under-trained (index {index} < {}) for a {duration} min run",
                    t.adequate_gut_index
                ),
                Some(t.adequate_gut_index),
            )
        } else if index < t.adequate_gut_index {
            (
                Vote::Amber,
                format!(
                    "Gut under-trained (index {index} < {}), fuel during the run",
                    t.adequate_gut_index
                ),
                Some(t.adequate_gut_index),
            )
        } else {
            (
                Vote::Green,
                format!("Gut trained (index {index}) for a {duration} min run"),
                None,
            )
        };

        let flagged = threshold.map_or_else(Vec::new, |th| {
            vec![FlaggedMetric::new(
                GUT_INDEX_METRIC,
                f64::from(index),
                f64::from(th),
            )]
        });

        debug!(
            agent = %AgentId::Fueling,
            vote = %vote,
            gut_training_index = index,
            next_run_duration_min = duration,
            "Fueling vote"
        );

        AgentVote::new(AgentId::Fueling, vote, OBJECTIVE_DATA, reason, flagged)
    }
}
