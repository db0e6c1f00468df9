// ABOUTME: Shared test builders for coaching engine integration tests
// ABOUTME: Session streams, planned workouts, votes, and a nominal decision input
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `coaching_engine`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use coaching_engine::coaching_intelligence::RollingAggregates;
use coaching_engine::models::{
    AgentId, AgentVote, PhenotypeProfile, SessionDataPoint, TrainingZone, Vote, Workout,
    WorkoutSegment, WorkoutStructure, WorkoutType,
};
use coaching_engine::DecisionInput;

/// Seconds between generated samples
pub const SAMPLE_SPACING_SECONDS: i64 = 5;

/// Start of every generated session
pub fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).unwrap()
}

/// Evaluation date of the nominal input
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// Timestamp of the sample at `index`
pub fn sample_time(index: usize) -> DateTime<Utc> {
    session_start() + Duration::seconds(index as i64 * SAMPLE_SPACING_SECONDS)
}

/// One point per heart rate value, evenly spaced
pub fn points_from_hr(heart_rates: &[f64]) -> Vec<SessionDataPoint> {
    heart_rates
        .iter()
        .enumerate()
        .map(|(i, hr)| SessionDataPoint::at(sample_time(i)).with_heart_rate(*hr))
        .collect()
}

/// Clean aerobic stream: HR cycles 140-144, cadence 170, 3.2 m/s
///
/// No flatline, no cadence lock and equal half averages when `count` is a
/// multiple of 10.
pub fn clean_stream(count: usize) -> Vec<SessionDataPoint> {
    (0..count)
        .map(|i| {
            SessionDataPoint::at(sample_time(i))
                .with_heart_rate(140.0 + (i % 5) as f64)
                .with_cadence(170.0)
                .with_speed(3.2)
        })
        .collect()
}

/// Easy Z2 run with a steady main set
pub fn easy_run(duration_minutes: u32, distance_km: f64) -> Workout {
    Workout::new(
        WorkoutType::Run,
        duration_minutes,
        Some(distance_km),
        TrainingZone::Z2Aerobic,
    )
    .with_structure(WorkoutStructure {
        warmup: Some("10 min easy".to_owned()),
        main_set: vec![WorkoutSegment::steady(
            "Steady aerobic running",
            duration_minutes.saturating_sub(15),
            TrainingZone::Z2Aerobic,
        )],
        cooldown: Some("5 min walk".to_owned()),
    })
}

/// Threshold interval session: 5 x 6 min Z4
pub fn interval_run() -> Workout {
    Workout::new(WorkoutType::Run, 60, Some(12.0), TrainingZone::Z4Threshold).with_structure(
        WorkoutStructure {
            warmup: Some("15 min easy".to_owned()),
            main_set: vec![WorkoutSegment {
                description: "Threshold repeats".to_owned(),
                duration_minutes: 6,
                zone: TrainingZone::Z4Threshold,
                repetitions: 5,
            }],
            cooldown: Some("10 min easy".to_owned()),
        },
    )
}

/// Vote with a generic reason and no flagged metrics
pub fn vote(agent_id: AgentId, vote: Vote) -> AgentVote {
    AgentVote::new(
        agent_id,
        vote,
        0.9,
        format!("{agent_id} says {vote}"),
        Vec::new(),
    )
}

/// Three GREEN votes
pub fn all_green() -> Vec<AgentVote> {
    vec![
        vote(AgentId::Structural, Vote::Green),
        vote(AgentId::Metabolic, Vote::Green),
        vote(AgentId::Fueling, Vote::Green),
    ]
}

/// Profile with explicit thresholds and two weak links
pub fn athlete_profile() -> PhenotypeProfile {
    PhenotypeProfile {
        max_hr: Some(190),
        anaerobic_floor_hr: Some(170),
        structural_weaknesses: vec!["Left Achilles".to_owned(), "Right hip".to_owned()],
        ..PhenotypeProfile::default()
    }
}

/// Aggregates with everything in range
pub fn nominal_aggregates() -> RollingAggregates {
    RollingAggregates {
        as_of: as_of(),
        rolling_tonnage_kg: 4000.0,
        rolling_mileage_km: 40.0,
        days_since_last_lift: Some(2),
        hrv_baseline_ms: Some(60.0),
        current_hrv_ms: Some(61.0),
        sleep_score: Some(78.0),
        gut_training_index: 4,
    }
}

/// Decision input where every agent and the governor are nominal
pub fn nominal_input() -> DecisionInput {
    DecisionInput {
        planned_workout: easy_run(60, 10.0),
        session_points: clean_stream(120),
        session_summary: Default::default(),
        profile: athlete_profile(),
        niggle_score: 1.0,
        phase_number: 2,
        aggregates: nominal_aggregates(),
        prior_red_zone_min: 0.0,
        plan_limit_red_zone_min: 30.0,
    }
}
