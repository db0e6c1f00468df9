// ABOUTME: Data-integrity status for sensor streams feeding the decision core
// ABOUTME: REJECTED data blocks decisions; SUSPECT data is annotated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trust level of a session stream; ordering is severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrityStatus {
    /// Data is trustworthy
    #[default]
    Accepted,
    /// Data has anomalies; decisions may proceed with a caveat
    Suspect,
    /// Data is untrustworthy; decisions must not be produced
    Rejected,
}

impl fmt::Display for IntegrityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Accepted => "ACCEPTED",
            Self::Suspect => "SUSPECT",
            Self::Rejected => "REJECTED",
        })
    }
}
