// ABOUTME: Running economy ratios from a session summary
// ABOUTME: Any missing or non-positive denominator yields None for that ratio only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coaching_core::models::{EconomyInput, EconomyMetrics};

/// Economy ratios for one session; never fails
#[must_use]
pub fn calculate_economy(input: &EconomyInput) -> EconomyMetrics {
    EconomyMetrics {
        speed_per_watt: ratio(input.avg_speed_mps, input.avg_power_w),
        stride_length_per_hr: ratio(input.stride_length_cm, input.avg_hr),
        vertical_ratio: ratio(input.vertical_oscillation_cm, input.stride_length_cm)
            .map(|r| r * 100.0),
    }
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if n.is_finite() && d.is_finite() && d > 0.0 => Some(n / d),
        _ => None,
    }
}
