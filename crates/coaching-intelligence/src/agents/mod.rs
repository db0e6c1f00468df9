// ABOUTME: Specialist agents that each cast one traffic-light vote per decision cycle
// ABOUTME: Structural (chassis and pain), Metabolic (engine), and Fueling (gut) evaluators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Agents
//!
//! Each agent looks at one physiological system and returns an [`AgentVote`].
//! Agents are total: every input, including unknown metrics, produces a vote.
//! Unknown inputs lower confidence rather than flipping the vote in either
//! direction. Agents never see each other's votes; combining them is the job
//! of the synthesis engine.

/// Fueling (gut training) agent
pub mod fueling;
/// Metabolic (aerobic engine) agent
pub mod metabolic;
/// Structural (chassis and pain) agent
pub mod structural;

pub use fueling::{FuelingAgent, FuelingInput};
pub use metabolic::{MetabolicAgent, MetabolicInput};
pub use structural::{StructuralAgent, StructuralInput};

use coaching_core::models::{AgentId, AgentVote};

/// A specialist evaluator casting one vote per cycle
pub trait Agent {
    /// Input the agent evaluates
    type Input;

    /// Which agent this is
    fn id(&self) -> AgentId;

    /// Evaluate the input and cast a vote
    fn evaluate(&self, input: &Self::Input) -> AgentVote;
}

/// Join non-empty reason fragments into one sentence list
pub(crate) fn join_reasons(reasons: &[String], fallback: &str) -> String {
    if reasons.is_empty() {
        fallback.to_owned()
    } else {
        reasons.join("; ")
    }
}
