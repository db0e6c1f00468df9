// ABOUTME: Agent vote model for the multi-agent decision layer
// ABOUTME: Traffic-light votes with confidence, reasoning, and the metrics that triggered them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the evaluator that produced a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentId {
    /// Musculoskeletal readiness ("chassis")
    Structural,
    /// Cardiovascular readiness ("engine")
    Metabolic,
    /// Fueling conditioning for long sessions
    Fueling,
}

impl AgentId {
    /// Display name used in reasoning strings
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Structural => "Structural",
            Self::Metabolic => "Metabolic",
            Self::Fueling => "Fueling",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Traffic-light vote; ordering is severity (`Green < Amber < Red`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vote {
    /// Proceed as planned
    Green,
    /// Proceed with reduced intensity or volume
    Amber,
    /// Do not proceed as planned
    Red,
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "GREEN",
            Self::Amber => "AMBER",
            Self::Red => "RED",
        })
    }
}

/// A metric that pushed a vote away from GREEN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedMetric {
    /// Metric name (e.g. `niggle_score`)
    pub metric: String,
    /// Observed value
    pub value: f64,
    /// Threshold it crossed
    pub threshold: f64,
}

impl FlaggedMetric {
    /// Create a flagged metric
    #[must_use]
    pub fn new(metric: impl Into<String>, value: f64, threshold: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
            threshold,
        }
    }
}

/// One evaluator's verdict for one evaluation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentVote {
    /// Which agent voted
    pub agent_id: AgentId,
    /// The vote
    pub vote: Vote,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// Human-readable explanation naming every condition that fired
    pub reason: String,
    /// Metrics that crossed thresholds
    #[serde(default)]
    pub flagged_metrics: Vec<FlaggedMetric>,
}

impl AgentVote {
    /// Create a vote; confidence is clamped to `[0, 1]`
    #[must_use]
    pub fn new(
        agent_id: AgentId,
        vote: Vote,
        confidence: f64,
        reason: impl Into<String>,
        flagged_metrics: Vec<FlaggedMetric>,
    ) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            agent_id,
            vote,
            confidence,
            reason: reason.into(),
            flagged_metrics,
        }
    }

    /// Whether a metric with this name was flagged
    #[must_use]
    pub fn flagged(&self, metric: &str) -> bool {
        self.flagged_metrics.iter().any(|m| m.metric == metric)
    }
}
