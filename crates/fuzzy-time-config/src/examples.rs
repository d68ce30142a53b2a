// crates/fuzzy-time-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for the fuzzy time configuration. Output is
//! deterministic and kept in sync with schema and docs by the artifact tests.

/// Returns a canonical example `fuzzy-time.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"# Tolerate sub-millisecond differences when comparing timestamps.
enabled = true
cutoff = "millisecond"
"#,
    )
}
