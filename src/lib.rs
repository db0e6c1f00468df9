// ABOUTME: Main library entry point for the coaching decision engine
// ABOUTME: Re-exports the decision core and adds configuration, logging, ingestion, and the replay CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coaching Engine
//!
//! Rule-based coaching decisions for an athlete who runs and lifts. Three
//! specialist agents vote on today's planned workout, a volume governor caps
//! running volume by strength support, and a synthesis engine turns the
//! votes into one concrete prescription.
//!
//! ## Architecture
//!
//! - **`coaching_core`**: data model, error taxonomy, policy constants
//! - **`coaching_intelligence`**: the pure decision core
//! - **config**: `COACHING_*` environment overrides
//! - **ingest**: raw provider payload mappers
//! - **logging**: tracing subscriber setup
//! - **cli**: the `coaching-replay` backtesting tool
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coaching_engine::config::load_from_env;
//! use coaching_engine::DecisionEngine;
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = DecisionEngine::with_config(load_from_env()?)?;
//!     println!("Integrity floor: {}", engine.config().governor.integrity_floor);
//!     Ok(())
//! }
//! ```

/// Command-line interface of the replay tool
pub mod cli;

/// Configuration loading
pub mod config;

/// Raw payload ingestion
pub mod ingest;

/// Structured logging setup
pub mod logging;

pub use coaching_core;
pub use coaching_intelligence;

pub use coaching_core::models;
pub use coaching_core::{CoachError, CoachResult, ErrorCode};
pub use coaching_intelligence::{
    compute_rollups, score_adherence, CoachingConfig, DecisionEngine, DecisionInput,
    DecisionReport, RollingAggregates, VolumeCap,
};
