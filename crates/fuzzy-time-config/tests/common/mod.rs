// crates/fuzzy-time-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for fuzzy-time-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use fuzzy_time_config::FuzzyTimeConfig;

/// Parses a TOML string into a `FuzzyTimeConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<FuzzyTimeConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<FuzzyTimeConfig, toml::de::Error> {
    config_from_toml("")
}
