// ABOUTME: Configuration error types for decision threshold validation
// ABOUTME: Defines error variants for invalid ranges, bad fractions, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for decision threshold validation.

use coaching_core::CoachError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Thresholds in the wrong order (e.g. amber above red)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Fraction outside `(0, 1]`
    #[error("Invalid fraction: {0}")]
    InvalidFraction(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// NaN or infinite threshold
    #[error("Value must be finite: {0}")]
    NonFinite(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for CoachError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error.to_string())
    }
}
