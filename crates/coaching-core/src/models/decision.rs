// ABOUTME: Decision and adherence result models handed to the UI and persistence layers
// ABOUTME: One DecisionResult per evaluation cycle; one AdherenceScore per completed session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AgentVote, Workout};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prescriptive action produced by synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionAction {
    /// Planned workout unchanged
    Proceed,
    /// Planned workout reduced or substituted
    Modified,
    /// Session shut down (full rest)
    Skipped,
}

impl fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Proceed => "PROCEED",
            Self::Modified => "MODIFIED",
            Self::Skipped => "SKIPPED",
        })
    }
}

/// Output of one evaluation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// What to do
    pub action: DecisionAction,
    /// The workout to execute
    pub final_workout: Workout,
    /// One entry per applied change
    pub modifications: Vec<String>,
    /// Synthesis of every contributing reason
    pub reasoning: String,
    /// Votes the decision was built from
    pub votes: Vec<AgentVote>,
}

/// Post-hoc adherence score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceScore {
    /// Score in `[-50, 100]`
    pub score: i32,
    /// Which rule produced the score
    pub reason: String,
    /// Whether the score is a penalty rather than missing credit
    pub penalty_applied: bool,
}
