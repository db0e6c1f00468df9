// ABOUTME: Derived durability and economy metric models
// ABOUTME: Each field is independently nullable; None means unknown, never zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Fatigue-resistance metrics derived from one session stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DurabilityMetrics {
    /// Aerobic decoupling ratio (0.05 = 5 % cardiac drift)
    pub decoupling: Option<f64>,
    /// Relative cadence change between initial and final windows
    pub cadence_drift: Option<f64>,
    /// Relative ground-contact-time change between initial and final windows
    pub form_decay: Option<f64>,
}

/// Session summary fields needed for economy ratios
///
/// Ingestion maps provider payloads into this struct; unknown fields stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomyInput {
    /// Average speed (m/s)
    #[serde(default)]
    pub avg_speed_mps: Option<f64>,
    /// Average power (W)
    #[serde(default)]
    pub avg_power_w: Option<f64>,
    /// Average heart rate (bpm)
    #[serde(default)]
    pub avg_hr: Option<f64>,
    /// Average stride length (cm)
    #[serde(default)]
    pub stride_length_cm: Option<f64>,
    /// Average vertical oscillation (cm)
    #[serde(default)]
    pub vertical_oscillation_cm: Option<f64>,
}

/// Running economy ratios
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomyMetrics {
    /// Speed per watt ((m/s)/W)
    pub speed_per_watt: Option<f64>,
    /// Stride length per heartbeat (cm/bpm)
    pub stride_length_per_hr: Option<f64>,
    /// Vertical oscillation as a percentage of stride length
    pub vertical_ratio: Option<f64>,
}
