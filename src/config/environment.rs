// ABOUTME: Environment variable overrides for decision thresholds
// ABOUTME: Parses COACHING_* variables onto the default threshold table, then validates
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based threshold configuration

use super::{CoachingConfig, ConfigError};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Every environment variable this module reads
pub const ENV_OVERRIDES: &[&str] = &[
    "COACHING_STRUCTURAL_AMBER_NIGGLE",
    "COACHING_STRUCTURAL_SEVERE_NIGGLE",
    "COACHING_STRUCTURAL_CHASSIS_DECAY_DAYS",
    "COACHING_METABOLIC_DECOUPLING_AMBER_PCT",
    "COACHING_METABOLIC_DECOUPLING_RED_PCT",
    "COACHING_FUELING_LONG_RUN_MINUTES",
    "COACHING_FUELING_ADEQUATE_GUT_INDEX",
    "COACHING_GOVERNOR_INTEGRITY_FLOOR",
    "COACHING_GOVERNOR_POOR_SLEEP_SCORE",
    "COACHING_ROLLUP_LOAD_WINDOW_DAYS",
];

/// Load thresholds from defaults plus `COACHING_*` overrides
///
/// # Errors
///
/// Returns `ConfigError::Parse` when a variable is set but unparsable, and
/// any validation error of the resulting configuration.
pub fn load_from_env() -> Result<CoachingConfig, ConfigError> {
    let config = apply_env_overrides(CoachingConfig::default())?;
    config.validate()?;
    Ok(config)
}

/// Apply overrides onto an existing configuration without validating it
///
/// # Errors
///
/// Returns `ConfigError::Parse` when a variable is set but unparsable.
pub fn apply_env_overrides(mut config: CoachingConfig) -> Result<CoachingConfig, ConfigError> {
    // Structural
    apply_env_var(
        "COACHING_STRUCTURAL_AMBER_NIGGLE",
        &mut config.structural.amber_niggle,
    )?;
    apply_env_var(
        "COACHING_STRUCTURAL_SEVERE_NIGGLE",
        &mut config.structural.severe_niggle,
    )?;
    apply_env_var(
        "COACHING_STRUCTURAL_CHASSIS_DECAY_DAYS",
        &mut config.structural.chassis_decay_days,
    )?;

    // Metabolic
    apply_env_var(
        "COACHING_METABOLIC_DECOUPLING_AMBER_PCT",
        &mut config.metabolic.decoupling_amber_pct,
    )?;
    apply_env_var(
        "COACHING_METABOLIC_DECOUPLING_RED_PCT",
        &mut config.metabolic.decoupling_red_pct,
    )?;

    // Fueling
    apply_env_var(
        "COACHING_FUELING_LONG_RUN_MINUTES",
        &mut config.fueling.long_run_minutes,
    )?;
    apply_env_var(
        "COACHING_FUELING_ADEQUATE_GUT_INDEX",
        &mut config.fueling.adequate_gut_index,
    )?;

    // Governor
    apply_env_var(
        "COACHING_GOVERNOR_INTEGRITY_FLOOR",
        &mut config.governor.integrity_floor,
    )?;
    apply_env_var(
        "COACHING_GOVERNOR_POOR_SLEEP_SCORE",
        &mut config.governor.poor_sleep_score,
    )?;

    // Rollups
    apply_env_var(
        "COACHING_ROLLUP_LOAD_WINDOW_DAYS",
        &mut config.rollups.load_window_days,
    )?;

    Ok(config)
}

fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        debug!(variable = env_var_name, "Applied threshold override");
    }
    Ok(())
}
