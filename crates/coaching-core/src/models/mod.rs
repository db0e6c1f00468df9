// ABOUTME: Core data models for the coaching decision engine
// ABOUTME: Re-exports session, workout, vote, decision, profile, and history types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shared by every layer of the engine.
//!
//! ## Design Principles
//!
//! - **Strict optional fields**: absent provider data is `None`, never a silent zero
//! - **Immutable inputs**: session points, profiles and history are read-only to the core
//! - **Serializable**: every model round-trips through JSON for the UI and replay tooling

mod decision;
mod history;
mod integrity;
mod metrics;
mod profile;
mod session;
mod vote;
mod workout;

pub use decision::{AdherenceScore, DecisionAction, DecisionResult};
pub use history::{HistoricalSession, WellnessDay};
pub use integrity::IntegrityStatus;
pub use metrics::{DurabilityMetrics, EconomyInput, EconomyMetrics};
pub use profile::PhenotypeProfile;
pub use session::SessionDataPoint;
pub use vote::{AgentId, AgentVote, FlaggedMetric, Vote};
pub use workout::{
    TrainingZone, Workout, WorkoutConstraints, WorkoutSegment, WorkoutStructure, WorkoutType,
};
