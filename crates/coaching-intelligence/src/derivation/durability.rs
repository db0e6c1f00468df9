// ABOUTME: Durability metrics: aerobic decoupling, cadence drift, and ground-contact form decay
// ABOUTME: Each metric needs at least ten valid samples or it is reported as unknown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::mean;
use coaching_core::constants::derivation::{DRIFT_WINDOW_FRACTION, MIN_VALID_POINTS};
use coaching_core::models::{DurabilityMetrics, SessionDataPoint};
use tracing::debug;

/// Aerobic decoupling (cardiac drift) for one session
///
/// Splits the points carrying a finite heart rate into halves by count
/// (midpoint `floor(n / 2)`) and returns `avg(second) / avg(first) - 1`.
/// Positive values mean HR rose over the session.
///
/// Returns `None` with fewer than ten valid points or a non-positive
/// first-half average.
#[must_use]
pub fn calculate_decoupling(points: &[SessionDataPoint]) -> Option<f64> {
    let hr = valid_channel(points, |p| p.heart_rate);
    if hr.len() < MIN_VALID_POINTS {
        debug!(
            valid_points = hr.len(),
            metric_name = "decoupling",
            "Not enough heart rate samples"
        );
        return None;
    }

    let mid = hr.len() / 2;
    let first = mean(&hr[..mid])?;
    let second = mean(&hr[mid..])?;
    if first <= 0.0 {
        return None;
    }
    Some(second / first - 1.0)
}

/// Relative cadence change between the first and last 10 % of the session
///
/// Returns `None` with fewer than ten cadence samples.
#[must_use]
pub fn calculate_cadence_drift(points: &[SessionDataPoint]) -> Option<f64> {
    window_drift(&valid_channel(points, |p| p.cadence), "cadence_drift")
}

/// Relative ground-contact-time change between the first and last 10 % of the session
///
/// Needs per-point GCT; a single aggregate value cannot express decay, so
/// sessions without a GCT stream return `None`.
#[must_use]
pub fn calculate_form_decay(points: &[SessionDataPoint]) -> Option<f64> {
    window_drift(
        &valid_channel(points, |p| p.ground_contact_time),
        "form_decay",
    )
}

/// All three durability metrics for one session
#[must_use]
pub fn calculate_durability(points: &[SessionDataPoint]) -> DurabilityMetrics {
    DurabilityMetrics {
        decoupling: calculate_decoupling(points),
        cadence_drift: calculate_cadence_drift(points),
        form_decay: calculate_form_decay(points),
    }
}

fn valid_channel<F>(points: &[SessionDataPoint], channel: F) -> Vec<f64>
where
    F: Fn(&SessionDataPoint) -> Option<f64>,
{
    points
        .iter()
        .filter_map(channel)
        .filter(|v| v.is_finite())
        .collect()
}

fn window_drift(values: &[f64], metric_name: &'static str) -> Option<f64> {
    if values.len() < MIN_VALID_POINTS {
        debug!(valid_points = values.len(), metric_name, "Not enough samples");
        return None;
    }

    let window = ((values.len() as f64 * DRIFT_WINDOW_FRACTION).floor() as usize).max(1);
    let initial = mean(&values[..window])?;
    let last = mean(&values[values.len() - window..])?;
    if initial <= 0.0 {
        return None;
    }
    Some((last - initial) / initial)
}
