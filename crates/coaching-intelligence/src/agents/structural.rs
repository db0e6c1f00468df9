// ABOUTME: Structural agent guarding the musculoskeletal chassis
// ABOUTME: Applies the hard pain veto, the amber pain band, and strength-recency (chassis decay) rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{join_reasons, Agent};
use crate::config::StructuralThresholds;
use coaching_core::constants::confidence::{DIRECT_REPORT, HISTORY_RULE};
use coaching_core::constants::structural::{DAYS_PER_WEEK, HARD_PAIN_VETO_NIGGLE, MAX_NIGGLE_SCORE};
use coaching_core::models::{AgentId, AgentVote, FlaggedMetric, PhenotypeProfile, Vote};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Metric name flagged when pain drives the vote
pub const NIGGLE_METRIC: &str = "niggle_score";
/// Metric name flagged when strength recency drives the vote
pub const LIFT_GAP_METRIC: &str = "days_since_last_lift";

/// Inputs for one structural evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralInput {
    /// Self-reported pain, 0-10
    pub niggle_score: f64,
    /// Days since the last strength session; `None` when none is recorded
    pub days_since_last_lift: Option<u32>,
}

/// Structural agent
///
/// Pain at or above 5 is a hard veto that no configuration or profile setting
/// can relax. The profile's personal niggle threshold can only tighten the
/// amber band, and its lift-day requirement can only shorten the allowed gap
/// between strength sessions.
#[derive(Debug, Clone, Default)]
pub struct StructuralAgent {
    thresholds: StructuralThresholds,
    personal_niggle_threshold: Option<f64>,
    personal_decay_days: Option<u32>,
}

impl StructuralAgent {
    /// Create an agent with the given thresholds and no personal override
    #[must_use]
    pub const fn new(thresholds: StructuralThresholds) -> Self {
        Self {
            thresholds,
            personal_niggle_threshold: None,
            personal_decay_days: None,
        }
    }

    /// Apply the athlete's personal niggle threshold and lift-day requirement
    ///
    /// Fitting N lift days into the trailing week requires the most recent one
    /// to be at most `7 - N` days ago. A requirement of zero sets no limit.
    #[must_use]
    pub fn with_profile(mut self, profile: &PhenotypeProfile) -> Self {
        self.personal_niggle_threshold = Some(profile.niggle_threshold);
        let required = profile.lift_days_required;
        self.personal_decay_days = (required > 0).then_some(DAYS_PER_WEEK.saturating_sub(required));
        self
    }

    /// Longest gap since the last lift that does not trigger chassis decay
    #[must_use]
    pub fn chassis_decay_days(&self) -> u32 {
        let configured = self.thresholds.chassis_decay_days;
        self.personal_decay_days
            .map_or(configured, |personal| personal.min(configured))
    }

    /// Lower bound of the amber pain band
    #[must_use]
    pub fn amber_niggle(&self) -> f64 {
        let configured = self.thresholds.amber_niggle;
        self.personal_niggle_threshold
            .filter(|t| t.is_finite() && *t >= 0.0)
            .map_or(configured, |personal| personal.min(configured))
    }

    fn pain_vote(&self, niggle: f64) -> Option<(Vote, String, FlaggedMetric)> {
        // NaN or out-of-scale pain is treated as maximal pain
        let niggle = if niggle.is_finite() && niggle >= 0.0 {
            niggle
        } else {
            MAX_NIGGLE_SCORE
        };

        if niggle >= HARD_PAIN_VETO_NIGGLE {
            return Some((
                Vote::Red,
                format!("Pain veto: niggle {niggle:.1} >= {HARD_PAIN_VETO_NIGGLE:.1}"),
                FlaggedMetric::new(NIGGLE_METRIC, niggle, HARD_PAIN_VETO_NIGGLE),
            ));
        }

        let amber = self.amber_niggle();
        if niggle >= amber {
            return Some((
                Vote::Amber,
                format!("Pain caution: niggle {niggle:.1} >= {amber:.1}"),
                FlaggedMetric::new(NIGGLE_METRIC, niggle, amber),
            ));
        }
        None
    }

    fn chassis_vote(&self, days_since_last_lift: Option<u32>) -> Option<(Vote, String, FlaggedMetric)> {
        let decay = self.chassis_decay_days();
        let collapse = self.thresholds.chassis_collapse_days;

        // No history: report the smallest gap that trips the rule
        let Some(days) = days_since_last_lift else {
            return Some((
                Vote::Amber,
                "Chassis decay: no strength session on record".to_owned(),
                FlaggedMetric::new(
                    LIFT_GAP_METRIC,
                    f64::from(decay.saturating_add(1)),
                    f64::from(decay),
                ),
            ));
        };

        if days >= collapse {
            Some((
                Vote::Red,
                format!("Chassis collapse: {days} days since last lift (>= {collapse})"),
                FlaggedMetric::new(LIFT_GAP_METRIC, f64::from(days), f64::from(collapse)),
            ))
        } else if days > decay {
            Some((
                Vote::Amber,
                format!("Chassis decay: {days} days since last lift (> {decay})"),
                FlaggedMetric::new(LIFT_GAP_METRIC, f64::from(days), f64::from(decay)),
            ))
        } else {
            None
        }
    }
}

impl Agent for StructuralAgent {
    type Input = StructuralInput;

    fn id(&self) -> AgentId {
        AgentId::Structural
    }

    fn evaluate(&self, input: &StructuralInput) -> AgentVote {
        let pain = self.pain_vote(input.niggle_score);
        let chassis = self.chassis_vote(input.days_since_last_lift);

        let vote = [&pain, &chassis]
            .iter()
            .filter_map(|c| c.as_ref().map(|(v, _, _)| *v))
            .max()
            .unwrap_or(Vote::Green);

        // Direct pain reports carry more weight than recency rules
        let confidence = if pain.is_some() {
            DIRECT_REPORT
        } else {
            HISTORY_RULE
        };

        let (reasons, flagged): (Vec<String>, Vec<FlaggedMetric>) = [pain, chassis]
            .into_iter()
            .flatten()
            .map(|(_, reason, metric)| (reason, metric))
            .unzip();

        let reason = join_reasons(&reasons, "No pain reported and strength work is current");

        debug!(
            agent = %AgentId::Structural,
            vote = %vote,
            niggle = input.niggle_score,
            days_since_last_lift = ?input.days_since_last_lift,
            "Structural vote"
        );

        AgentVote::new(AgentId::Structural, vote, confidence, reason, flagged)
    }
}
