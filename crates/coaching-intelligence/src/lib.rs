// ABOUTME: Multi-agent coaching decision core for a hybrid runner-lifter
// ABOUTME: Pure and deterministic: derivation, agents, governor, synthesis, adherence, and replay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coaching Intelligence
//!
//! The decision core. No I/O, no environment access and no wall clock: the
//! same inputs always produce the same votes, decisions and scores.
//!
//! ## Modules
//!
//! - **derivation**: durability, economy and time-in-zone metrics
//! - **agents**: Structural, Metabolic and Fueling voters
//! - **governor**: integrity-ratio volume cap
//! - **synthesis**: veto engine producing the final decision
//! - **adherence**: post-hoc session scoring
//! - **integrity**: sensor data classifier
//! - **rollups**: rolling aggregates from history
//! - **pipeline**: end-to-end evaluation and parallel replay

/// Post-hoc adherence scoring
pub mod adherence;
/// Specialist agents
pub mod agents;
/// Decision threshold configuration
pub mod config;
/// Metric derivation from session data
pub mod derivation;
/// Integrity-ratio volume governor
pub mod governor;
/// Sensor data integrity classifier
pub mod integrity;
/// End-to-end decision pipeline
pub mod pipeline;
/// Rolling aggregates
pub mod rollups;
/// Synthesis and veto engine
pub mod synthesis;

pub use adherence::{score_adherence, score_outcome, SessionOutcome};
pub use agents::{
    Agent, FuelingAgent, FuelingInput, MetabolicAgent, MetabolicInput, StructuralAgent,
    StructuralInput,
};
pub use config::{CoachingConfig, ConfigError};
pub use governor::{BindingConstraint, GovernorInput, VolumeCap, VolumeGovernor};
pub use integrity::{IntegrityClassifier, IntegrityIssue, IntegrityIssueKind, IntegrityReport};
pub use pipeline::{DecisionEngine, DecisionInput, DecisionReport};
pub use rollups::{compute_rollups, RollingAggregates};
pub use synthesis::{SynthesisContext, SynthesisEngine};
