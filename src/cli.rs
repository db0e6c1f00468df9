// ABOUTME: Command-line interface for backtesting decisions against recorded inputs
// ABOUTME: Evaluate, replay, and score subcommands reading JSON files and producing JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Evaluate one decision cycle
//! coaching-replay evaluate --input cycle.json
//!
//! # Replay a season of cycles in parallel
//! coaching-replay replay --input season.json
//!
//! # Score an executed session against its prescription
//! coaching-replay score --planned workout.json --actual-zone Z2_AEROBIC --phase 1
//! ```

use crate::config::{load_from_env, CoachingConfig};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use coaching_core::errors::ErrorReport;
use coaching_core::models::{TrainingZone, Workout};
use coaching_intelligence::{score_adherence, DecisionEngine, DecisionInput};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Coaching decision backtesting tool
#[derive(Debug, Parser)]
#[command(
    name = "coaching-replay",
    about = "Coaching decision engine backtesting CLI",
    long_about = "Evaluate, replay, and score coaching decisions from recorded JSON inputs."
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Threshold configuration file (JSON); defaults plus `COACHING_*` overrides when absent
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Replay tool subcommands
#[non_exhaustive]
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one decision cycle
    Evaluate {
        /// File holding one decision input
        #[arg(long)]
        input: PathBuf,
    },

    /// Evaluate many decision cycles in parallel
    Replay {
        /// File holding an array of decision inputs
        #[arg(long)]
        input: PathBuf,
    },

    /// Score an executed session against its prescription
    Score {
        /// File holding the prescribed workout
        #[arg(long)]
        planned: PathBuf,

        /// Zone the session was executed in
        #[arg(long, value_parser = parse_zone)]
        actual_zone: Option<TrainingZone>,

        /// The session was missed
        #[arg(long)]
        missed: bool,

        /// A prescribed substitution was completed instead
        #[arg(long)]
        substitution: bool,

        /// Training phase (1 = base)
        #[arg(long, default_value_t = 1)]
        phase: u8,
    },
}

/// Parse a zone given as `Z3_TEMPO`, `z3` or `3`
///
/// # Errors
///
/// Returns a message naming the accepted forms when the zone is unknown.
pub fn parse_zone(raw: &str) -> Result<TrainingZone, String> {
    let normalized = raw.trim().to_uppercase();
    let number = normalized.trim_start_matches('Z').chars().next();
    match number {
        Some('1') => Ok(TrainingZone::Z1Recovery),
        Some('2') => Ok(TrainingZone::Z2Aerobic),
        Some('3') => Ok(TrainingZone::Z3Tempo),
        Some('4') => Ok(TrainingZone::Z4Threshold),
        Some('5') => Ok(TrainingZone::Z5Vo2Max),
        _ => Err(format!(
            "unknown zone `{raw}` (expected Z1_RECOVERY..Z5_VO2_MAX, z1..z5 or 1..5)"
        )),
    }
}

/// Run a parsed command and return its JSON output
///
/// Hard decision errors are part of the output (`{"error": ...}`), not
/// failures of the tool.
///
/// # Errors
///
/// Returns an error when an input file cannot be read or parsed, or the
/// threshold configuration is invalid.
pub fn run(cli: &Cli) -> Result<Value> {
    match &cli.command {
        Command::Evaluate { input } => {
            let engine = build_engine(cli.config.as_deref())?;
            let input: DecisionInput = read_json(input)?;
            Ok(match engine.evaluate(&input) {
                Ok(report) => json!({ "report": report }),
                Err(e) => json!({ "error": ErrorReport::from(&e) }),
            })
        }
        Command::Replay { input } => {
            let engine = build_engine(cli.config.as_deref())?;
            let inputs: Vec<DecisionInput> = read_json(input)?;
            let results = engine.replay(&inputs);
            let failed = results.iter().filter(|r| r.is_err()).count();
            info!(cycles = results.len(), failed, "Replay complete");

            let cycles: Vec<Value> = results
                .into_iter()
                .enumerate()
                .map(|(index, result)| match result {
                    Ok(report) => json!({ "index": index, "report": report }),
                    Err(e) => json!({ "index": index, "error": ErrorReport::from(&e) }),
                })
                .collect();
            Ok(json!({ "cycles": cycles, "failed": failed }))
        }
        Command::Score {
            planned,
            actual_zone,
            missed,
            substitution,
            phase,
        } => {
            let planned: Workout = read_json(planned)?;
            let score = score_adherence(&planned, *actual_zone, *missed, *substitution, *phase);
            Ok(serde_json::to_value(score)?)
        }
    }
}

fn build_engine(config_path: Option<&Path>) -> Result<DecisionEngine> {
    let config = match config_path {
        Some(path) => read_json::<CoachingConfig>(path)?,
        None => load_from_env()?,
    };
    DecisionEngine::with_config(config)
        .map_err(|e| anyhow!("Invalid threshold configuration: {e}"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| anyhow!("Failed to parse {}: {e}", path.display()))
}
