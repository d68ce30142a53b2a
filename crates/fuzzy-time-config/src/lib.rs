// crates/fuzzy-time-config/src/lib.rs
// ============================================================================
// Module: Fuzzy Time Config Library
// Description: Canonical config model, validation, and artifact generation.
// Purpose: Single source of truth for fuzzy-time.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `fuzzy-time-config` defines the configuration surface for the fuzzy time
//! comparison matchers: the `fuzzy-time-enabled` toggle and the `time-cutoff`
//! comparison precision. It provides strict, fail-closed loading and
//! deterministic generators for config schema, examples, and docs.
//!
//! The matchers themselves live elsewhere; they take a [`FuzzyTimeConfig`]
//! snapshot or a [`SettingsRegistry`] by reference and never read ambient
//! global state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod cutoff;
pub mod docs;
pub mod examples;
pub mod registry;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use cutoff::TimeCutoff;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_toml_example;
pub use registry::*;
pub use schema::config_schema;
