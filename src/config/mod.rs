// ABOUTME: Configuration loading for the coaching engine outside the pure decision core
// ABOUTME: Re-exports the threshold types and adds environment-based loading
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management
//!
//! The decision core never touches the environment. This module is the only
//! place `COACHING_*` variables are read.

/// `COACHING_*` environment overrides
pub mod environment;

pub use coaching_intelligence::config::{
    CoachingConfig, ConfigError, FuelingThresholds, GovernorThresholds, IntegrityThresholds,
    MetabolicThresholds, RollupWindows, StructuralThresholds, SynthesisPolicy,
};
pub use environment::{apply_env_overrides, load_from_env, ENV_OVERRIDES};
