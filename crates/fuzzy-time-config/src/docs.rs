// crates/fuzzy-time-config/src/docs.rs
// ============================================================================
// Module: Config Docs Generator
// Description: Markdown generator for fuzzy-time.toml documentation.
// Purpose: Keep config docs in sync with schema and validation.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates `Docs/configuration/fuzzy-time.toml.md` from the canonical
//! configuration schema. Rendering fails when a schema field is missing from
//! the section spec or a documented field is missing from the schema, so the
//! docs cannot silently drift from the model.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::config_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated configuration docs.
const DOCS_PATH: &str = "Docs/configuration/fuzzy-time.toml.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying config docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the configuration markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/fuzzy-time.toml.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Fuzzy Time Configuration\n");
    out.push_str("Description: Reference for fuzzy-time.toml configuration fields.\n");
    out.push_str("Purpose: Document the fuzzy comparison toggle and cutoff precision.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# fuzzy-time.toml Configuration\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("`fuzzy-time.toml` configures the fuzzy time comparison matchers. All\n");
    out.push_str("inputs are validated and fail closed on errors; with no file present the\n");
    out.push_str("defaults below apply.\n\n");

    out.push_str("## Settings\n\n");

    let sections = build_sections();
    for section in sections {
        out.push_str("### ");
        out.push_str(section.heading);
        out.push_str("\n\n");
        if !section.description.is_empty() {
            out.push_str(section.description);
            out.push_str("\n\n");
        }
        let table = render_table(&schema, &section).map_err(DocsError::Schema)?;
        out.push_str(&table);
        if let Some(extra) = section.extra {
            out.push('\n');
            out.push_str(extra);
            out.push('\n');
        }
        out.push('\n');
    }

    Ok(out)
}

/// Writes the generated docs to the standard location.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Section Specs
// ============================================================================

/// Specification for one rendered documentation section.
#[derive(Clone)]
struct SectionSpec {
    /// Section heading.
    heading: &'static str,
    /// Section description displayed beneath the heading.
    description: &'static str,
    /// Ordered field list rendered in the docs table.
    fields: &'static [&'static str],
    /// Optional additional text appended after the table.
    extra: Option<&'static str>,
}

/// Builds the ordered list of configuration sections to render.
fn build_sections() -> Vec<SectionSpec> {
    vec![SectionSpec {
        heading: "Top-level",
        description: "Fuzzy comparison toggle and cutoff precision.",
        fields: &["enabled", "cutoff"],
        extra: Some(
            "Registry setting names: `enabled` is registered as `fuzzy-time-enabled`, \
             `cutoff` as `time-cutoff`.",
        ),
    }]
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders the markdown table for a configuration section.
fn render_table(schema: &Value, section: &SectionSpec) -> Result<String, String> {
    let props = schema
        .get("properties")
        .and_then(|value| value.as_object())
        .ok_or_else(|| "schema properties missing".to_string())?;

    let mut seen = BTreeSet::new();
    for field in section.fields {
        if !props.contains_key(*field) {
            return Err(format!("missing field in schema: {field}"));
        }
        seen.insert(*field);
    }
    for key in props.keys() {
        if !seen.contains(key.as_str()) {
            return Err(format!("field not documented: {key}"));
        }
    }

    let mut table = String::new();
    table.push_str("| Field | Type | Default | Notes |\n");
    table.push_str("| --- | --- | --- | --- |\n");

    for field in section.fields {
        let prop_schema =
            props.get(*field).ok_or_else(|| format!("missing field schema: {field}"))?;
        let field_type = format_schema_type(prop_schema);
        let default_value = prop_schema
            .get("default")
            .map(format_default_value)
            .ok_or_else(|| format!("missing field default: {field}"))?;
        let notes =
            prop_schema.get("description").and_then(|value| value.as_str()).unwrap_or("");
        let _ = writeln!(&mut table, "| `{field}` | {field_type} | {default_value} | {notes} |");
    }

    Ok(table)
}

/// Formats a schema type for markdown tables.
fn format_schema_type(schema: &Value) -> String {
    let raw = format_schema_type_raw(schema);
    escape_table_cell(&raw)
}

/// Formats a schema type without markdown escaping.
fn format_schema_type_raw(schema: &Value) -> String {
    if let Some(enum_vals) = schema.get("enum").and_then(|val| val.as_array()) {
        let items = enum_vals.iter().map(format_enum_value).collect::<Vec<String>>();
        return items.join(" | ");
    }
    if let Some(type_str) = schema.get("type").and_then(|val| val.as_str()) {
        return match type_str {
            "boolean" => "bool".to_string(),
            "object" => "table".to_string(),
            other => other.to_string(),
        };
    }
    "unknown".to_string()
}

/// Escapes pipe characters for markdown table cells.
fn escape_table_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Formats enum values as TOML-compatible strings.
fn format_enum_value(value: &Value) -> String {
    value.as_str().map_or_else(|| value.to_string(), |text| format!("\"{text}\""))
}

/// Formats schema defaults for display in docs.
fn format_default_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(val) => val.to_string(),
        Value::Number(val) => val.to_string(),
        Value::String(val) => format!("\"{val}\""),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
