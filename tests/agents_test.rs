// ABOUTME: Integration tests for the Structural, Metabolic, and Fueling agents
// ABOUTME: Covers the hard pain veto, chassis decay, HRV tightening, and gut training rules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use coaching_engine::coaching_intelligence::agents::metabolic::{
    DECOUPLING_METRIC, RED_ZONE_METRIC,
};
use coaching_engine::coaching_intelligence::agents::structural::{
    LIFT_GAP_METRIC, NIGGLE_METRIC,
};
use coaching_engine::coaching_intelligence::config::{
    FuelingThresholds, MetabolicThresholds, StructuralThresholds,
};
use coaching_engine::coaching_intelligence::{
    Agent, FuelingAgent, FuelingInput, MetabolicAgent, MetabolicInput, StructuralAgent,
    StructuralInput,
};
use coaching_engine::models::{AgentId, PhenotypeProfile, Vote};

fn structural() -> StructuralAgent {
    StructuralAgent::new(StructuralThresholds::default())
}

fn structural_vote(niggle_score: f64, days_since_last_lift: Option<u32>) -> Vote {
    structural()
        .evaluate(&StructuralInput {
            niggle_score,
            days_since_last_lift,
        })
        .vote
}

fn metabolic_input(decoupling_pct: Option<f64>, red_zone_min: f64) -> MetabolicInput {
    MetabolicInput {
        aerobic_decoupling_pct: decoupling_pct,
        time_in_red_zone_min: red_zone_min,
        plan_limit_red_zone_min: 30.0,
        hrv_baseline_ms: Some(60.0),
        current_hrv_ms: Some(60.0),
    }
}

fn fueling_vote(gut_training_index: u32, next_run_duration_min: u32) -> Vote {
    FuelingAgent::new(FuelingThresholds::default())
        .evaluate(&FuelingInput {
            gut_training_index,
            next_run_duration_min,
        })
        .vote
}

// ============================================================================
// Structural agent
// ============================================================================

#[test]
fn test_pain_veto_is_red_regardless_of_lifting() {
    for niggle in [5.0, 6.0, 9.5, 10.0] {
        assert_eq!(structural_vote(niggle, Some(0)), Vote::Red, "niggle {niggle}");
        assert_eq!(structural_vote(niggle, Some(3)), Vote::Red, "niggle {niggle}");
    }
}

#[test]
fn test_pain_veto_flags_niggle_with_high_confidence() {
    let vote = structural().evaluate(&StructuralInput {
        niggle_score: 5.0,
        days_since_last_lift: Some(1),
    });
    assert_eq!(vote.vote, Vote::Red);
    assert!(vote.flagged(NIGGLE_METRIC));
    assert!(!vote.flagged(LIFT_GAP_METRIC));
    assert!((vote.confidence - 0.95).abs() < 1e-9);
}

#[test]
fn test_amber_pain_band() {
    assert_eq!(structural_vote(3.0, Some(2)), Vote::Amber);
    assert_eq!(structural_vote(4.9, Some(5)), Vote::Amber);
    assert_eq!(structural_vote(2.9, Some(2)), Vote::Green);
}

#[test]
fn test_non_finite_niggle_is_treated_as_maximal_pain() {
    assert_eq!(structural_vote(f64::NAN, Some(1)), Vote::Red);
    assert_eq!(structural_vote(-1.0, Some(1)), Vote::Red);
}

#[test]
fn test_personal_threshold_only_tightens() {
    let strict = PhenotypeProfile {
        niggle_threshold: 2.0,
        ..PhenotypeProfile::default()
    };
    let agent = structural().with_profile(&strict);
    assert!((agent.amber_niggle() - 2.0).abs() < 1e-9);
    let vote = agent.evaluate(&StructuralInput {
        niggle_score: 2.5,
        days_since_last_lift: Some(1),
    });
    assert_eq!(vote.vote, Vote::Amber);

    let lax = PhenotypeProfile {
        niggle_threshold: 4.5,
        ..PhenotypeProfile::default()
    };
    let agent = structural().with_profile(&lax);
    assert!((agent.amber_niggle() - 3.0).abs() < 1e-9);
    let vote = agent.evaluate(&StructuralInput {
        niggle_score: 3.5,
        days_since_last_lift: Some(1),
    });
    assert_eq!(vote.vote, Vote::Amber);
}

#[test]
fn test_personal_threshold_cannot_relax_veto() {
    let lax = PhenotypeProfile {
        niggle_threshold: 9.0,
        ..PhenotypeProfile::default()
    };
    let vote = structural().with_profile(&lax).evaluate(&StructuralInput {
        niggle_score: 5.0,
        days_since_last_lift: Some(1),
    });
    assert_eq!(vote.vote, Vote::Red);
}

#[test]
fn test_chassis_decay_rules() {
    assert_eq!(structural_vote(0.0, Some(5)), Vote::Green);
    assert_eq!(structural_vote(0.0, Some(6)), Vote::Amber);
    assert_eq!(structural_vote(0.0, Some(13)), Vote::Amber);
    assert_eq!(structural_vote(0.0, Some(14)), Vote::Red);
    assert_eq!(structural_vote(0.0, None), Vote::Amber);
}

#[test]
fn test_chassis_vote_flags_lift_gap() {
    let vote = structural().evaluate(&StructuralInput {
        niggle_score: 1.0,
        days_since_last_lift: Some(8),
    });
    assert_eq!(vote.vote, Vote::Amber);
    assert!(vote.flagged(LIFT_GAP_METRIC));
    assert!(!vote.flagged(NIGGLE_METRIC));
    assert!((vote.confidence - 0.80).abs() < 1e-9);
}

#[test]
fn test_missing_lift_history_flags_a_finite_gap() {
    let vote = structural().evaluate(&StructuralInput {
        niggle_score: 0.0,
        days_since_last_lift: None,
    });
    assert_eq!(vote.vote, Vote::Amber);
    let metric = &vote.flagged_metrics[0];
    assert_eq!(metric.metric, LIFT_GAP_METRIC);
    assert!(metric.value.is_finite());
    assert_eq!(metric.value, 6.0);
    assert_eq!(metric.threshold, 5.0);
}

fn lift_days(lift_days_required: u32) -> StructuralAgent {
    structural().with_profile(&PhenotypeProfile {
        lift_days_required,
        ..PhenotypeProfile::default()
    })
}

#[test]
fn test_lift_day_requirement_shortens_allowed_gap() {
    let agent = lift_days(3);
    assert_eq!(agent.chassis_decay_days(), 4);
    let vote = agent.evaluate(&StructuralInput {
        niggle_score: 0.0,
        days_since_last_lift: Some(5),
    });
    assert_eq!(vote.vote, Vote::Amber);
    assert!(vote.reason.contains("(> 4)"));
    assert_eq!(vote.flagged_metrics[0].threshold, 4.0);

    let vote = agent.evaluate(&StructuralInput {
        niggle_score: 0.0,
        days_since_last_lift: Some(4),
    });
    assert_eq!(vote.vote, Vote::Green);
}

#[test]
fn test_lift_day_requirement_never_relaxes_configured_gap() {
    // Two lift days a week matches the canonical five-day gap
    assert_eq!(lift_days(2).chassis_decay_days(), 5);
    assert_eq!(lift_days(1).chassis_decay_days(), 5);
    assert_eq!(lift_days(0).chassis_decay_days(), 5);
    assert_eq!(lift_days(7).chassis_decay_days(), 0);

    let vote = lift_days(1).evaluate(&StructuralInput {
        niggle_score: 0.0,
        days_since_last_lift: Some(6),
    });
    assert_eq!(vote.vote, Vote::Amber);
}

#[test]
fn test_structural_reason_names_every_condition() {
    let vote = structural().evaluate(&StructuralInput {
        niggle_score: 3.5,
        days_since_last_lift: Some(8),
    });
    assert_eq!(vote.vote, Vote::Amber);
    assert!(vote.reason.contains("Pain caution"));
    assert!(vote.reason.contains("Chassis decay"));
    assert_eq!(vote.flagged_metrics.len(), 2);
}

#[test]
fn test_structural_green_reason() {
    let vote = structural().evaluate(&StructuralInput {
        niggle_score: 1.0,
        days_since_last_lift: Some(2),
    });
    assert_eq!(vote.vote, Vote::Green);
    assert_eq!(vote.agent_id, AgentId::Structural);
    assert!(vote.flagged_metrics.is_empty());
    assert!(!vote.reason.is_empty());
}

// ============================================================================
// Metabolic agent
// ============================================================================

#[test]
fn test_decoupling_bands() {
    let agent = MetabolicAgent::new(MetabolicThresholds::default());
    assert_eq!(agent.evaluate(&metabolic_input(Some(4.0), 0.0)).vote, Vote::Green);
    assert_eq!(agent.evaluate(&metabolic_input(Some(5.0), 0.0)).vote, Vote::Green);
    assert_eq!(agent.evaluate(&metabolic_input(Some(6.0), 0.0)).vote, Vote::Amber);
    assert_eq!(agent.evaluate(&metabolic_input(Some(11.0), 0.0)).vote, Vote::Red);
}

#[test]
fn test_red_zone_budget_exceeded_is_red() {
    let agent = MetabolicAgent::new(MetabolicThresholds::default());
    let vote = agent.evaluate(&metabolic_input(Some(2.0), 31.0));
    assert_eq!(vote.vote, Vote::Red);
    assert!(vote.flagged(RED_ZONE_METRIC));
    assert!(!vote.flagged(DECOUPLING_METRIC));
}

#[test]
fn test_hrv_suppression_tightens_thresholds() {
    let agent = MetabolicAgent::new(MetabolicThresholds::default());
    assert!(agent.hrv_suppressed(Some(60.0), Some(50.0)));
    assert!(!agent.hrv_suppressed(Some(60.0), Some(55.0)));
    assert!(!agent.hrv_suppressed(None, Some(50.0)));

    // 4 % passes normally but exceeds the tightened 3.75 % amber line
    let input = MetabolicInput {
        current_hrv_ms: Some(50.0),
        ..metabolic_input(Some(4.0), 0.0)
    };
    let vote = agent.evaluate(&input);
    assert_eq!(vote.vote, Vote::Amber);
    assert!(vote.reason.contains("HRV suppressed"));

    // Red-zone limit tightens too: 25 min > 22.5 min
    let input = MetabolicInput {
        current_hrv_ms: Some(50.0),
        ..metabolic_input(Some(1.0), 25.0)
    };
    assert_eq!(agent.evaluate(&input).vote, Vote::Red);
}

#[test]
fn test_unknown_decoupling_lowers_confidence_only() {
    let agent = MetabolicAgent::new(MetabolicThresholds::default());
    let vote = agent.evaluate(&metabolic_input(None, 0.0));
    assert_eq!(vote.vote, Vote::Green);
    assert!((vote.confidence - 0.60).abs() < 1e-9);
    assert!(vote.reason.contains("Decoupling unknown"));

    let vote = agent.evaluate(&metabolic_input(None, 45.0));
    assert_eq!(vote.vote, Vote::Red);
}

#[test]
fn test_metabolic_confidence_with_complete_data() {
    let agent = MetabolicAgent::new(MetabolicThresholds::default());
    let vote = agent.evaluate(&metabolic_input(Some(2.0), 10.0));
    assert_eq!(vote.agent_id, AgentId::Metabolic);
    assert!((vote.confidence - 0.85).abs() < 1e-9);
}

// ============================================================================
// Fueling agent
// ============================================================================

#[test]
fn test_short_runs_are_always_green() {
    assert_eq!(fueling_vote(0, 45), Vote::Green);
    assert_eq!(fueling_vote(0, 90), Vote::Green);
}

#[test]
fn test_long_run_with_untrained_gut_is_red() {
    assert_eq!(fueling_vote(0, 120), Vote::Red);
}

#[test]
fn test_very_long_run_needs_adequate_gut() {
    assert_eq!(fueling_vote(2, 160), Vote::Red);
    assert_eq!(fueling_vote(2, 150), Vote::Amber);
    assert_eq!(fueling_vote(2, 120), Vote::Amber);
}

#[test]
fn test_trained_gut_is_green() {
    assert_eq!(fueling_vote(3, 120), Vote::Green);
    assert_eq!(fueling_vote(5, 200), Vote::Green);
}

#[test]
fn test_agent_ids() {
    assert_eq!(structural().id(), AgentId::Structural);
    assert_eq!(MetabolicAgent::default().id(), AgentId::Metabolic);
    assert_eq!(FuelingAgent::default().id(), AgentId::Fueling);
}
