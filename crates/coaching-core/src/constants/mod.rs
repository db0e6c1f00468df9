// ABOUTME: Policy constants for the coaching decision engine, grouped by component
// ABOUTME: Values here are fixed policy; tunable thresholds live in the intelligence config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Only values that must never vary between deployments live here: the hard
//! pain veto, adherence score constants (historical scores must stay
//! comparable), and minimum sample sizes for derivations. Everything that an
//! operator may tune is part of `CoachingConfig` in the intelligence crate.

/// Structural (musculoskeletal) policy
pub mod structural {
    /// Niggle score at or above which the Structural agent always votes RED.
    ///
    /// Independent of profile and configuration.
    pub const HARD_PAIN_VETO_NIGGLE: f64 = 5.0;

    /// Upper bound of the self-reported niggle scale
    pub const MAX_NIGGLE_SCORE: f64 = 10.0;

    /// Window over which the profile's lift-day requirement is counted
    pub const DAYS_PER_WEEK: u32 = 7;
}

/// Minimum sample sizes for time-series derivations
pub mod derivation {
    /// Valid points required before decoupling, cadence drift or form decay is computed
    pub const MIN_VALID_POINTS: usize = 10;

    /// Fraction of points in each of the initial/final windows
    pub const DRIFT_WINDOW_FRACTION: f64 = 0.10;

    /// Gaps between samples longer than this are not counted as time-in-zone (seconds)
    pub const MAX_SAMPLE_GAP_SECONDS: i64 = 30;

    /// Anaerobic floor as a fraction of max HR when no explicit floor is set
    pub const ANAEROBIC_FLOOR_FRACTION_OF_MAX_HR: f64 = 0.90;
}

/// Adherence scoring constants
///
/// Changing any of these breaks comparability with stored historical scores.
pub mod adherence {
    /// Athlete correctly followed a substitution
    pub const VALID_SUBSTITUTION_SCORE: i32 = 100;
    /// Session executed in the prescribed zone
    pub const EXACT_MATCH_SCORE: i32 = 100;
    /// Session executed, different zone
    pub const PARTIAL_CREDIT_SCORE: i32 = 75;
    /// Session missed without a valid substitution
    pub const LAZY_MISS_SCORE: i32 = 0;
    /// Tempo/threshold work during base building
    pub const TRASH_ZONE_PENALTY_SCORE: i32 = -50;
    /// Phase number of the base-building block
    pub const BASE_PHASE_NUMBER: u8 = 1;
}

/// Confidence levels attached to agent votes
pub mod confidence {
    /// Vote driven by direct athlete report (pain)
    pub const DIRECT_REPORT: f64 = 0.95;
    /// Vote driven by complete objective data
    pub const OBJECTIVE_DATA: f64 = 0.85;
    /// Vote driven by a recency/history rule
    pub const HISTORY_RULE: f64 = 0.80;
    /// Vote computed with one or more inputs unknown
    pub const PARTIAL_DATA: f64 = 0.60;
}
