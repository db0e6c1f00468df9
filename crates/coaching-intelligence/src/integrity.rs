// ABOUTME: Sensor data integrity classifier run before decisions rely on a session stream
// ABOUTME: Detects implausible HR, optical cadence lock, HR dropout, and flatlined sensors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Integrity Classifier
//!
//! Wrist-based optical HR sensors can lock onto the running cadence and report
//! step rate as heart rate. A decoupling computed from such a stream is
//! meaningless, so the classifier grades every stream ACCEPTED, SUSPECT or
//! REJECTED. The report lists every issue found; the status is the worst.

use crate::config::IntegrityThresholds;
use coaching_core::constants::derivation::MIN_VALID_POINTS;
use coaching_core::models::{IntegrityStatus, SessionDataPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Kind of integrity problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrityIssueKind {
    /// HR outside the physiologically plausible range
    ImplausibleHeartRate,
    /// HR tracks cadence (optical sensor locked on step rate)
    CadenceLock,
    /// Large share of samples without HR
    HeartRateDropout,
    /// Identical HR for a long run of samples
    Flatline,
}

impl fmt::Display for IntegrityIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ImplausibleHeartRate => "implausible heart rate",
            Self::CadenceLock => "cadence lock",
            Self::HeartRateDropout => "heart rate dropout",
            Self::Flatline => "flatline",
        })
    }
}

/// One problem found in a stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityIssue {
    /// What was detected
    pub kind: IntegrityIssueKind,
    /// Status this issue alone implies
    pub severity: IntegrityStatus,
    /// Measured value (fraction of samples, or run length for flatlines)
    pub value: f64,
    /// Human-readable description
    pub message: String,
}

/// Classification of one session stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Worst severity among the issues
    pub status: IntegrityStatus,
    /// Every issue found
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    fn from_issues(issues: Vec<IntegrityIssue>) -> Self {
        let status = issues
            .iter()
            .map(|i| i.severity)
            .max()
            .unwrap_or(IntegrityStatus::Accepted);
        Self { status, issues }
    }

    /// All issue messages joined for error and log output
    #[must_use]
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            return "no integrity issues".to_owned();
        }
        self.issues
            .iter()
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Stream integrity classifier
#[derive(Debug, Clone, Default)]
pub struct IntegrityClassifier {
    thresholds: IntegrityThresholds,
}

impl IntegrityClassifier {
    /// Create a classifier with the given thresholds
    #[must_use]
    pub const fn new(thresholds: IntegrityThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a session stream
    #[must_use]
    pub fn classify(&self, points: &[SessionDataPoint]) -> IntegrityReport {
        if points.is_empty() {
            return IntegrityReport::default();
        }

        let issues: Vec<IntegrityIssue> = [
            self.check_implausible(points),
            self.check_cadence_lock(points),
            self.check_dropout(points),
            self.check_flatline(points),
        ]
        .into_iter()
        .flatten()
        .collect();

        let report = IntegrityReport::from_issues(issues);
        match report.status {
            IntegrityStatus::Rejected => {
                warn!(issues = %report.summary(), "Session stream rejected");
            }
            status => debug!(status = %status, issues = report.issues.len(), "Session stream classified"),
        }
        report
    }

    fn check_implausible(&self, points: &[SessionDataPoint]) -> Option<IntegrityIssue> {
        let t = &self.thresholds;
        let hr: Vec<f64> = finite_heart_rates(points).collect();
        if hr.is_empty() {
            return None;
        }
        let implausible = hr
            .iter()
            .filter(|v| **v < t.min_plausible_hr || **v > t.max_plausible_hr)
            .count();
        let fraction = implausible as f64 / hr.len() as f64;
        (fraction > t.implausible_reject_fraction).then(|| IntegrityIssue {
            kind: IntegrityIssueKind::ImplausibleHeartRate,
            severity: IntegrityStatus::Rejected,
            value: fraction,
            message: format!(
                "{:.0}% of HR samples outside {:.0}-{:.0} bpm",
                fraction * 100.0,
                t.min_plausible_hr,
                t.max_plausible_hr
            ),
        })
    }

    fn check_cadence_lock(&self, points: &[SessionDataPoint]) -> Option<IntegrityIssue> {
        let t = &self.thresholds;
        let paired: Vec<(f64, f64)> = points
            .iter()
            .filter_map(|p| p.heart_rate.zip(p.cadence))
            .filter(|(hr, cad)| hr.is_finite() && cad.is_finite() && *cad > 0.0)
            .collect();
        if paired.len() < MIN_VALID_POINTS {
            return None;
        }
        let locked = paired
            .iter()
            .filter(|(hr, cad)| (hr - cad).abs() <= t.cadence_lock_tolerance)
            .count();
        let fraction = locked as f64 / paired.len() as f64;

        let severity = if fraction >= t.cadence_lock_reject_fraction {
            IntegrityStatus::Rejected
        } else if fraction >= t.cadence_lock_suspect_fraction {
            IntegrityStatus::Suspect
        } else {
            return None;
        };
        Some(IntegrityIssue {
            kind: IntegrityIssueKind::CadenceLock,
            severity,
            value: fraction,
            message: format!(
                "Cadence lock: HR within {:.0} of cadence on {:.0}% of samples",
                t.cadence_lock_tolerance,
                fraction * 100.0
            ),
        })
    }

    fn check_dropout(&self, points: &[SessionDataPoint]) -> Option<IntegrityIssue> {
        let missing = points.len() - finite_heart_rates(points).count();
        let fraction = missing as f64 / points.len() as f64;
        (fraction > self.thresholds.dropout_suspect_fraction).then(|| IntegrityIssue {
            kind: IntegrityIssueKind::HeartRateDropout,
            severity: IntegrityStatus::Suspect,
            value: fraction,
            message: format!("HR missing on {:.0}% of samples", fraction * 100.0),
        })
    }

    fn check_flatline(&self, points: &[SessionDataPoint]) -> Option<IntegrityIssue> {
        let longest = longest_identical_run(points);
        (longest >= self.thresholds.flatline_run_length).then(|| IntegrityIssue {
            kind: IntegrityIssueKind::Flatline,
            severity: IntegrityStatus::Suspect,
            value: longest as f64,
            message: format!("HR flatlined for {longest} consecutive samples"),
        })
    }
}

fn finite_heart_rates(points: &[SessionDataPoint]) -> impl Iterator<Item = f64> + '_ {
    points
        .iter()
        .filter_map(|p| p.heart_rate)
        .filter(|hr| hr.is_finite())
}

/// Longest run of consecutive samples carrying the same HR value
fn longest_identical_run(points: &[SessionDataPoint]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<f64> = None;

    for hr in points.iter().map(|p| p.heart_rate.filter(|v| v.is_finite())) {
        match (previous, hr) {
            (Some(prev), Some(now)) if (prev - now).abs() < f64::EPSILON => current += 1,
            (_, Some(_)) => current = 1,
            (_, None) => current = 0,
        }
        previous = hr;
        longest = longest.max(current);
    }
    longest
}
