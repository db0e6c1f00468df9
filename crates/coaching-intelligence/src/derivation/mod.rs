// ABOUTME: Metric derivation from session time series and activity summaries
// ABOUTME: Pure functions computing durability, economy, and time-in-zone features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Metric Derivation
//!
//! Feature engineering that feeds the agents. Insufficient data is reported as
//! `None` ("unknown"), never as zero: a missing decoupling value is neither a
//! good nor a bad sign, and callers must branch on it explicitly.

/// Aerobic decoupling, cadence drift and form decay
pub mod durability;
/// Speed/watt, stride/HR and vertical ratio
pub mod economy;
/// Time spent above the anaerobic floor
pub mod zones;

pub use durability::{
    calculate_cadence_drift, calculate_decoupling, calculate_durability, calculate_form_decay,
};
pub use economy::calculate_economy;
pub use zones::{anaerobic_floor_hr, time_in_red_zone_minutes};

/// Arithmetic mean, `None` for an empty slice
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
