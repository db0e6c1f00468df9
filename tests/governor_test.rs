// ABOUTME: Integration tests for the volume governor
// ABOUTME: Covers the integrity-ratio floor, sleep tightening, and the advisory double-days flag
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coaching_engine::coaching_intelligence::config::GovernorThresholds;
use coaching_engine::coaching_intelligence::{BindingConstraint, GovernorInput, VolumeGovernor};

fn governor() -> VolumeGovernor {
    VolumeGovernor::new(GovernorThresholds::default())
}

fn input(tonnage: f64, mileage: f64, sleep: Option<f64>) -> GovernorInput {
    GovernorInput {
        rolling_tonnage_kg: tonnage,
        rolling_mileage_km: mileage,
        sleep_quality: sleep,
        planned_distance_km: Some(12.0),
    }
}

#[test]
fn test_no_strength_caps_running_volume() {
    let cap = governor().compute_cap(&input(0.0, 60.0, Some(75.0)));
    assert!(cap.integrity_ratio.abs() < 1e-9);
    assert_eq!(cap.binding_constraint, BindingConstraint::IntegrityFloor);
    assert!(cap.is_binding());
    assert!(cap.capped_distance_km.unwrap() < 12.0);
    assert!(!cap.reasoning.is_empty());
    assert!(cap.reasoning.contains("floor"));
}

#[test]
fn test_ratio_guards_zero_mileage() {
    let ratio = governor().integrity_ratio(100.0, 0.0);
    assert!((ratio - 100.0).abs() < 1e-9);
    let ratio = governor().integrity_ratio(f64::NAN, 10.0);
    assert!(ratio.abs() < 1e-9);
}

#[test]
fn test_supported_volume_is_not_capped() {
    let cap = governor().compute_cap(&input(4000.0, 40.0, Some(75.0)));
    assert!((cap.integrity_ratio - 100.0).abs() < 1e-9);
    assert!((cap.cap_fraction - 1.0).abs() < 1e-9);
    assert_eq!(cap.binding_constraint, BindingConstraint::None);
    assert!(!cap.is_binding());
    assert!((cap.capped_distance_km.unwrap() - 12.0).abs() < 1e-9);
    assert!(cap.reasoning.contains("no volume cap"));
}

#[test]
fn test_poor_sleep_alone_tightens_cap() {
    let cap = governor().compute_cap(&input(4000.0, 40.0, Some(50.0)));
    assert_eq!(cap.binding_constraint, BindingConstraint::SleepQuality);
    assert!((cap.cap_fraction - 0.85).abs() < 1e-9);
    assert!(cap.reasoning.contains("Sleep quality"));
}

#[test]
fn test_floor_and_poor_sleep_compound() {
    let cap = governor().compute_cap(&input(1000.0, 40.0, Some(40.0)));
    assert_eq!(cap.binding_constraint, BindingConstraint::IntegrityAndSleep);
    assert!((cap.cap_fraction - 0.7 * 0.85).abs() < 1e-9);
    assert!((cap.capped_distance_km.unwrap() - 12.0 * 0.595).abs() < 1e-9);
}

#[test]
fn test_double_days_flag_is_advisory() {
    let cap = governor().compute_cap(&input(8000.0, 40.0, Some(90.0)));
    assert!(cap.should_trigger_double_days);
    assert!((cap.cap_fraction - 1.0).abs() < 1e-9);
    assert!(cap.reasoning.contains("advisory"));

    let cap = governor().compute_cap(&input(8000.0, 40.0, Some(80.0)));
    assert!(!cap.should_trigger_double_days);

    let cap = governor().compute_cap(&input(8000.0, 40.0, None));
    assert!(!cap.should_trigger_double_days);
}

#[test]
fn test_no_planned_distance_yields_no_capped_distance() {
    let cap = governor().compute_cap(&GovernorInput {
        planned_distance_km: None,
        ..input(0.0, 60.0, None)
    });
    assert!(cap.capped_distance_km.is_none());
    assert!(cap.is_binding());
}

#[test]
fn test_binding_constraint_display() {
    assert_eq!(BindingConstraint::IntegrityFloor.to_string(), "integrity floor");
    assert_eq!(BindingConstraint::SleepQuality.to_string(), "sleep quality");
    assert!(!BindingConstraint::None.is_binding());
}
