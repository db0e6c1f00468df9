// ABOUTME: Time-in-zone derivation against the athlete's anaerobic floor
// ABOUTME: Fails loudly when the profile lacks both an anaerobic floor and a max HR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coaching_core::constants::derivation::{
    ANAEROBIC_FLOOR_FRACTION_OF_MAX_HR, MAX_SAMPLE_GAP_SECONDS,
};
use coaching_core::models::{PhenotypeProfile, SessionDataPoint};
use coaching_core::{CoachError, CoachResult};

/// Heart rate at which the athlete crosses into the red zone
///
/// Uses the explicit anaerobic floor, else 90 % of the explicit max HR.
///
/// # Errors
///
/// Returns `CoachError::InvalidProfile` when neither field is set. A guessed
/// population default could turn a red session into a GREEN vote.
pub fn anaerobic_floor_hr(profile: &PhenotypeProfile) -> CoachResult<f64> {
    if let Some(floor) = profile.anaerobic_floor_hr {
        return Ok(f64::from(floor));
    }
    if let Some(max_hr) = profile.max_hr {
        return Ok(f64::from(max_hr) * ANAEROBIC_FLOOR_FRACTION_OF_MAX_HR);
    }
    Err(CoachError::invalid_profile(
        "anaerobic_floor_hr",
        "time-in-red-zone needs an anaerobic floor or a max HR override",
    ))
}

/// Minutes spent at or above the anaerobic floor
///
/// Each sample owns the interval up to the next sample; intervals longer than
/// 30 s (pauses, dropouts) are not counted.
///
/// # Errors
///
/// Returns `CoachError::InvalidProfile` when the floor cannot be determined.
pub fn time_in_red_zone_minutes(
    points: &[SessionDataPoint],
    profile: &PhenotypeProfile,
) -> CoachResult<f64> {
    let floor = anaerobic_floor_hr(profile)?;

    let seconds: i64 = points
        .windows(2)
        .filter(|pair| pair[0].heart_rate.is_some_and(|hr| hr >= floor))
        .map(|pair| (pair[1].timestamp - pair[0].timestamp).num_seconds())
        .filter(|gap| (1..=MAX_SAMPLE_GAP_SECONDS).contains(gap))
        .sum();

    Ok(seconds as f64 / 60.0)
}
