// ABOUTME: Session data point model for sampled workout streams
// ABOUTME: One immutable instant of heart rate, speed, cadence, and ground contact time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sampled instant of a workout
///
/// Points arrive in chronological order but are not necessarily evenly spaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDataPoint {
    /// When the sample was recorded
    pub timestamp: DateTime<Utc>,
    /// Heart rate (bpm)
    #[serde(default)]
    pub heart_rate: Option<f64>,
    /// Speed (m/s)
    #[serde(default)]
    pub speed: Option<f64>,
    /// Cadence (steps per minute)
    #[serde(default)]
    pub cadence: Option<f64>,
    /// Ground contact time (ms)
    #[serde(default)]
    pub ground_contact_time: Option<f64>,
}

impl SessionDataPoint {
    /// Create a point with only a timestamp; every channel starts absent
    #[must_use]
    pub const fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            heart_rate: None,
            speed: None,
            cadence: None,
            ground_contact_time: None,
        }
    }

    /// Set heart rate
    #[must_use]
    pub const fn with_heart_rate(mut self, bpm: f64) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    /// Set speed
    #[must_use]
    pub const fn with_speed(mut self, meters_per_second: f64) -> Self {
        self.speed = Some(meters_per_second);
        self
    }

    /// Set cadence
    #[must_use]
    pub const fn with_cadence(mut self, steps_per_minute: f64) -> Self {
        self.cadence = Some(steps_per_minute);
        self
    }

    /// Set ground contact time
    #[must_use]
    pub const fn with_ground_contact_time(mut self, millis: f64) -> Self {
        self.ground_contact_time = Some(millis);
        self
    }
}
