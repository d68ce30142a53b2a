//! Config artifact validation tests for fuzzy-time-config.
// crates/fuzzy-time-config/tests/config_artifacts.rs
// ============================================================================
// Module: Config Artifact Validation Tests
// Description: Validate config schema, example, and docs generators.
// Purpose: Prevent drift between config model and generated artifacts.
// Dependencies: fuzzy-time-config, jsonschema, toml
// ============================================================================

use fuzzy_time_config::TimeCutoff;
use fuzzy_time_config::config_docs_markdown;
use fuzzy_time_config::config_schema;
use fuzzy_time_config::config_toml_example;
use jsonschema::Draft;
use serde_json::json;

mod common;

type TestResult = Result<(), String>;

#[test]
fn config_schema_accepts_minimal_and_example_configs() -> TestResult {
    let schema = config_schema();
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| err.to_string())?;

    let minimal = json!({});
    if !validator.is_valid(&minimal) {
        return Err("minimal config should be valid".to_string());
    }

    let toml_str = config_toml_example();
    let toml_value: toml::Value = toml::from_str(&toml_str).map_err(|err| err.to_string())?;
    let json_value = serde_json::to_value(toml_value).map_err(|err| err.to_string())?;
    if !validator.is_valid(&json_value) {
        return Err("example config should validate".to_string());
    }
    Ok(())
}

#[test]
fn config_schema_rejects_unknown_settings() -> TestResult {
    let schema = config_schema();
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| err.to_string())?;
    if validator.is_valid(&json!({ "tolerance_ms": 5 })) {
        return Err("schema should reject unknown settings".to_string());
    }
    Ok(())
}

#[test]
fn config_schema_rejects_out_of_enum_cutoff() -> TestResult {
    let schema = config_schema();
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| err.to_string())?;
    if validator.is_valid(&json!({ "cutoff": "second" })) {
        return Err("schema should reject unrecognized cutoff values".to_string());
    }
    Ok(())
}

#[test]
fn example_round_trips_into_typed_model() -> TestResult {
    let config =
        common::config_from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    if !config.enabled {
        return Err("example should enable fuzzy comparison".to_string());
    }
    if config.cutoff != TimeCutoff::Millisecond {
        return Err("example should set the millisecond cutoff".to_string());
    }
    Ok(())
}

#[test]
fn config_docs_generate_without_error() -> TestResult {
    let docs = config_docs_markdown().map_err(|err| err.to_string())?;
    if !docs.contains("# fuzzy-time.toml Configuration") {
        return Err("docs missing title header".to_string());
    }
    Ok(())
}
