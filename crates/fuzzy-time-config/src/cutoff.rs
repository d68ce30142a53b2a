// crates/fuzzy-time-config/src/cutoff.rs
// ============================================================================
// Module: Time Cutoff
// Description: Comparison precision for fuzzy time matching.
// Purpose: Name the granularity below which timestamp differences are ignored.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`TimeCutoff`] is the truncation granularity for fuzzy time comparison:
//! two timestamps compare equal when they agree down to the cutoff, whatever
//! finer-grained digits say. The default cutoff keeps full nanosecond
//! precision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Cutoff Type
// ============================================================================

/// Truncation granularity for fuzzy time comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeCutoff {
    /// Keep full nanosecond precision.
    #[default]
    Nanosecond,
    /// Ignore differences below one microsecond.
    Microsecond,
    /// Ignore differences below one millisecond.
    Millisecond,
}

impl TimeCutoff {
    /// Canonical cutoff names accepted in config files and registry values.
    pub const NAMES: [&'static str; 3] = ["nanosecond", "microsecond", "millisecond"];

    /// Returns the canonical name used in `fuzzy-time.toml`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nanosecond => "nanosecond",
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
        }
    }

    /// Returns the cutoff granularity in nanoseconds.
    ///
    /// Consumers truncate sub-second components to a multiple of this value
    /// before comparing.
    #[must_use]
    pub const fn subsecond_nanos(self) -> u32 {
        match self {
            Self::Nanosecond => 1,
            Self::Microsecond => 1_000,
            Self::Millisecond => 1_000_000,
        }
    }
}

impl fmt::Display for TimeCutoff {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Error raised when parsing an unrecognized cutoff name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time cutoff: {name}")]
pub struct ParseCutoffError {
    /// The rejected cutoff name.
    name: String,
}

impl FromStr for TimeCutoff {
    type Err = ParseCutoffError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "nanosecond" => Ok(Self::Nanosecond),
            "microsecond" => Ok(Self::Microsecond),
            "millisecond" => Ok(Self::Millisecond),
            other => Err(ParseCutoffError {
                name: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
