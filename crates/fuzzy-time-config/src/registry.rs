// crates/fuzzy-time-config/src/registry.rs
// ============================================================================
// Module: Settings Registry
// Description: Named settings with registered defaults and user overrides.
// Purpose: Provide the register/get surface the matcher suite reads.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The settings registry holds the two fuzzy-time settings by name:
//! `fuzzy-time-enabled` and `time-cutoff`. Defaults are registered once
//! during a non-concurrent setup phase and read many times afterwards; only
//! end-user configuration overrides them. The registry is an explicitly
//! constructed value passed by reference to consumers, never ambient global
//! state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::FuzzyTimeConfig;
use crate::cutoff::TimeCutoff;

// ============================================================================
// SECTION: Setting Names
// ============================================================================

/// Setting name for the fuzzy comparison toggle.
pub const FUZZY_TIME_ENABLED: &str = "fuzzy-time-enabled";
/// Setting name for the comparison cutoff precision.
pub const TIME_CUTOFF: &str = "time-cutoff";

// ============================================================================
// SECTION: Registry Types
// ============================================================================

/// Value stored for a registered setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean setting value.
    Bool(bool),
    /// Cutoff precision setting value.
    Cutoff(TimeCutoff),
}

impl SettingValue {
    /// Returns the kind label used in type-mismatch errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Cutoff(_) => "cutoff",
        }
    }
}

/// One registered setting: the default plus an optional override.
#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Default registered at setup time.
    default: SettingValue,
    /// End-user override, when set.
    override_value: Option<SettingValue>,
}

/// Registry of named settings with defaults and overrides.
#[derive(Debug, Clone, Default)]
pub struct SettingsRegistry {
    /// Registered settings keyed by name.
    entries: BTreeMap<String, Entry>,
}

/// Errors raised by registry reads and writes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The setting name was never registered.
    #[error("unknown setting: {0}")]
    Unknown(String),
    /// The value kind does not match the registered default.
    #[error("setting {name} expects {expected}, got {actual}")]
    Type {
        /// Setting name the write or read targeted.
        name: String,
        /// Kind registered for the setting.
        expected: &'static str,
        /// Kind of the offending value.
        actual: &'static str,
    },
}

// ============================================================================
// SECTION: Registry Operations
// ============================================================================

impl SettingsRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the fuzzy time defaults registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_defaults(&mut registry);
        registry
    }

    /// Registers a default for a named setting.
    ///
    /// Registration is idempotent: re-registering an existing name keeps the
    /// entry already in place, including any user override.
    pub fn register(&mut self, name: &str, default: SettingValue) {
        self.entries.entry(name.to_string()).or_insert(Entry {
            default,
            override_value: None,
        });
    }

    /// Returns the effective value: the override when set, else the default.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unknown`] for unregistered names.
    pub fn get(&self, name: &str) -> Result<SettingValue, RegistryError> {
        self.entries
            .get(name)
            .map(|entry| entry.override_value.unwrap_or(entry.default))
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// Overrides a registered setting with an end-user value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unknown`] for unregistered names and
    /// [`RegistryError::Type`] when the value kind does not match the
    /// registered default.
    pub fn set(&mut self, name: &str, value: SettingValue) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))?;
        if entry.default.kind() != value.kind() {
            return Err(RegistryError::Type {
                name: name.to_string(),
                expected: entry.default.kind(),
                actual: value.kind(),
            });
        }
        entry.override_value = Some(value);
        Ok(())
    }

    /// Returns the number of registered settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no settings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies a loaded configuration as overrides for both settings.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unknown`] when defaults were not registered
    /// before the configuration was applied.
    pub fn apply(&mut self, config: &FuzzyTimeConfig) -> Result<(), RegistryError> {
        self.set(FUZZY_TIME_ENABLED, SettingValue::Bool(config.enabled))?;
        self.set(TIME_CUTOFF, SettingValue::Cutoff(config.cutoff))?;
        Ok(())
    }

    /// Returns the typed view matchers take by reference.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when either setting is missing or carries a
    /// value of the wrong kind.
    pub fn snapshot(&self) -> Result<FuzzyTimeConfig, RegistryError> {
        let enabled = match self.get(FUZZY_TIME_ENABLED)? {
            SettingValue::Bool(value) => value,
            other => {
                return Err(RegistryError::Type {
                    name: FUZZY_TIME_ENABLED.to_string(),
                    expected: "bool",
                    actual: other.kind(),
                });
            }
        };
        let cutoff = match self.get(TIME_CUTOFF)? {
            SettingValue::Cutoff(value) => value,
            other => {
                return Err(RegistryError::Type {
                    name: TIME_CUTOFF.to_string(),
                    expected: "cutoff",
                    actual: other.kind(),
                });
            }
        };
        Ok(FuzzyTimeConfig {
            enabled,
            cutoff,
        })
    }
}

/// Registers the fuzzy time settings with their defaults.
///
/// Idempotent: running the registration twice leaves the same two defaults in
/// place and introduces no other settings.
pub fn register_defaults(registry: &mut SettingsRegistry) {
    registry.register(FUZZY_TIME_ENABLED, SettingValue::Bool(false));
    registry.register(TIME_CUTOFF, SettingValue::Cutoff(TimeCutoff::default()));
}

// ============================================================================
// SECTION: Tests
// ============================================================================
