// ABOUTME: Unified error handling for the coaching decision engine
// ABOUTME: Defines hard decision errors, stable error codes, and a serializable error report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Hard errors that must reach the caller. Missing data is *not* an error in
//! this crate: derivations return `None` and callers branch on it.
//!
//! Every variant here blocks a decision. None of them may be converted into a
//! GREEN vote or a PROCEED action by any layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes for hard decision errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A profile field needed by an evaluator is absent
    #[serde(rename = "INVALID_PROFILE")]
    InvalidProfile = 3100,
    /// Caller-supplied input is malformed or incomplete
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Upstream data-integrity check rejected the session data
    #[serde(rename = "INTEGRITY_REJECTED")]
    IntegrityRejected = 4200,
    /// Threshold configuration is inconsistent
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// User-facing description rendered by the "cannot evaluate" state
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidProfile => "The athlete profile is missing a required threshold",
            Self::InvalidInput => "The provided input is invalid",
            Self::IntegrityRejected => "Session data failed integrity checks and cannot be trusted",
            Self::ConfigInvalid => "Decision thresholds are misconfigured",
        }
    }
}

/// Hard errors raised by the decision core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoachError {
    /// A required profile field is absent when an evaluator needs it
    #[error("invalid profile: required field `{field}` is missing ({context})")]
    InvalidProfile {
        /// Name of the missing profile field
        field: &'static str,
        /// What needed the field
        context: String,
    },

    /// Upstream integrity status is REJECTED
    #[error("integrity rejected: {reason}")]
    IntegrityRejected {
        /// Why the data was rejected
        reason: String,
    },

    /// Input that cannot be evaluated at all
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Thresholds that contradict each other
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoachError {
    /// Create an invalid-profile error
    #[must_use]
    pub fn invalid_profile(field: &'static str, context: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            context: context.into(),
        }
    }

    /// Create an integrity-rejected error
    #[must_use]
    pub fn integrity_rejected(reason: impl Into<String>) -> Self {
        Self::IntegrityRejected {
            reason: reason.into(),
        }
    }

    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidProfile { .. } => ErrorCode::InvalidProfile,
            Self::IntegrityRejected { .. } => ErrorCode::IntegrityRejected,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::InvalidConfig(_) => ErrorCode::ConfigInvalid,
        }
    }
}

/// Serializable form of a hard error for the downstream UI/persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Stable error code
    pub code: ErrorCode,
    /// Generic description of the error class
    pub description: String,
    /// Specific message
    pub message: String,
}

impl From<&CoachError> for ErrorReport {
    fn from(error: &CoachError) -> Self {
        let code = error.code();
        Self {
            code,
            description: code.description().to_owned(),
            message: error.to_string(),
        }
    }
}

/// Result type alias for the decision core
pub type CoachResult<T> = Result<T, CoachError>;
