// ABOUTME: Core types and constants for the coaching decision engine
// ABOUTME: Foundation crate with the data model, error handling, and policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coaching Core
//!
//! Foundation crate providing shared types and constants for the coaching
//! decision engine. Everything here is plain data: no I/O, no environment
//! access, no clocks.
//!
//! ## Modules
//!
//! - **errors**: `CoachError`, `ErrorCode`, and the `CoachResult` alias
//! - **constants**: Policy constants (pain vetoes, adherence scores, sample minimums)
//! - **models**: Session points, workouts, votes, decisions, profiles, history records

/// Unified error handling with stable error codes
pub mod errors;

/// Policy constants organized by decision component
pub mod constants;

/// Core data models (sessions, workouts, votes, decisions)
pub mod models;

pub use errors::{CoachError, CoachResult, ErrorCode};
