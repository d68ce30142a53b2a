// crates/fuzzy-time-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builder for fuzzy-time.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the fuzzy time configuration.
//! Defaults are sourced from the same `Default` impls the serde model uses,
//! so the schema cannot drift from runtime behavior. The schema is consumed
//! by tooling, docs generation, and validation tests.

use serde_json::Value;
use serde_json::json;

use crate::config::FuzzyTimeConfig;
use crate::cutoff::TimeCutoff;

/// Returns the JSON schema for `fuzzy-time.toml`.
#[must_use]
pub fn config_schema() -> Value {
    let defaults = FuzzyTimeConfig::default();
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "fuzzy-time://contract/schemas/config.schema.json",
        "title": "Fuzzy Time Configuration",
        "description": "Configuration for the fuzzy time comparison matchers.",
        "type": "object",
        "properties": {
            "enabled": {
                "type": "boolean",
                "default": defaults.enabled,
                "description": "Enable fuzzy time comparison."
            },
            "cutoff": {
                "type": "string",
                "enum": TimeCutoff::NAMES,
                "default": defaults.cutoff.as_str(),
                "description": "Truncation granularity for time comparisons."
            }
        },
        "additionalProperties": false
    })
}
