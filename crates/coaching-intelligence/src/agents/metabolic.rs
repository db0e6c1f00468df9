// ABOUTME: Metabolic agent guarding the aerobic engine
// ABOUTME: Votes on aerobic decoupling and red-zone time, tightened when HRV is suppressed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{join_reasons, Agent};
use crate::config::MetabolicThresholds;
use coaching_core::constants::confidence::{OBJECTIVE_DATA, PARTIAL_DATA};
use coaching_core::models::{AgentId, AgentVote, FlaggedMetric, Vote};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Metric name flagged for aerobic decoupling
pub const DECOUPLING_METRIC: &str = "aerobic_decoupling_pct";
/// Metric name flagged for red-zone time
pub const RED_ZONE_METRIC: &str = "time_in_red_zone_min";

/// Inputs for one metabolic evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetabolicInput {
    /// Aerobic decoupling of the last session in percent; `None` when unknown
    pub aerobic_decoupling_pct: Option<f64>,
    /// Minutes spent above the anaerobic floor this week
    pub time_in_red_zone_min: f64,
    /// Red-zone minutes the training plan allows
    pub plan_limit_red_zone_min: f64,
    /// Rolling HRV baseline (ms)
    pub hrv_baseline_ms: Option<f64>,
    /// Most recent HRV reading (ms)
    pub current_hrv_ms: Option<f64>,
}

/// Thresholds in force for one evaluation, after HRV tightening
#[derive(Debug, Clone, Copy, PartialEq)]
struct EffectiveLimits {
    amber_pct: f64,
    red_pct: f64,
    red_zone_limit: f64,
    hrv_suppressed: bool,
}

/// Metabolic agent
#[derive(Debug, Clone, Default)]
pub struct MetabolicAgent {
    thresholds: MetabolicThresholds,
}

impl MetabolicAgent {
    /// Create an agent with the given thresholds
    #[must_use]
    pub const fn new(thresholds: MetabolicThresholds) -> Self {
        Self { thresholds }
    }

    /// Whether current HRV sits more than the configured percentage below baseline
    #[must_use]
    pub fn hrv_suppressed(&self, baseline: Option<f64>, current: Option<f64>) -> bool {
        match (baseline, current) {
            (Some(base), Some(now)) if base > 0.0 && now.is_finite() => {
                (base - now) / base * 100.0 > self.thresholds.hrv_suppression_pct
            }
            _ => false,
        }
    }

    fn limits(&self, input: &MetabolicInput) -> EffectiveLimits {
        let t = &self.thresholds;
        let hrv_suppressed = self.hrv_suppressed(input.hrv_baseline_ms, input.current_hrv_ms);
        let factor = if hrv_suppressed {
            t.hrv_tightening_factor
        } else {
            1.0
        };
        EffectiveLimits {
            amber_pct: t.decoupling_amber_pct * factor,
            red_pct: t.decoupling_red_pct * factor,
            red_zone_limit: input.plan_limit_red_zone_min * factor,
            hrv_suppressed,
        }
    }
}

impl Agent for MetabolicAgent {
    type Input = MetabolicInput;

    fn id(&self) -> AgentId {
        AgentId::Metabolic
    }

    fn evaluate(&self, input: &MetabolicInput) -> AgentVote {
        let limits = self.limits(input);
        let mut vote = Vote::Green;
        let mut reasons = Vec::new();
        let mut flagged = Vec::new();

        if limits.hrv_suppressed {
            reasons.push("HRV suppressed below baseline, thresholds tightened".to_owned());
        }

        let decoupling = input.aerobic_decoupling_pct.filter(|d| d.is_finite());
        match decoupling {
            Some(pct) if pct > limits.red_pct => {
                vote = vote.max(Vote::Red);
                reasons.push(format!(
                    "Engine overload: decoupling {pct:.1}% > {:.1}%",
                    limits.red_pct
                ));
                flagged.push(FlaggedMetric::new(DECOUPLING_METRIC, pct, limits.red_pct));
            }
            Some(pct) if pct > limits.amber_pct => {
                vote = vote.max(Vote::Amber);
                reasons.push(format!(
                    "Aerobic drift: decoupling {pct:.1}% > {:.1}%",
                    limits.amber_pct
                ));
                flagged.push(FlaggedMetric::new(DECOUPLING_METRIC, pct, limits.amber_pct));
            }
            Some(_) => {}
            None => reasons.push("Decoupling unknown".to_owned()),
        }

        let red_zone = input.time_in_red_zone_min;
        if red_zone > limits.red_zone_limit || red_zone.is_nan() {
            vote = vote.max(Vote::Red);
            reasons.push(format!(
                "Red-zone budget exceeded: {red_zone:.0} min > {:.0} min",
                limits.red_zone_limit
            ));
            flagged.push(FlaggedMetric::new(
                RED_ZONE_METRIC,
                red_zone,
                limits.red_zone_limit,
            ));
        }

        if vote == Vote::Green && decoupling.is_some() {
            reasons.push("Aerobic engine stable".to_owned());
        }

        let confidence = if decoupling.is_some() {
            OBJECTIVE_DATA
        } else {
            PARTIAL_DATA
        };

        debug!(
            agent = %AgentId::Metabolic,
            vote = %vote,
            decoupling_pct = ?decoupling,
            red_zone_min = red_zone,
            hrv_suppressed = limits.hrv_suppressed,
            "Metabolic vote"
        );

        AgentVote::new(
            AgentId::Metabolic,
            vote,
            confidence,
            join_reasons(&reasons, "Aerobic engine stable"),
            flagged,
        )
    }
}
