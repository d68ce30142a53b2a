//! Config load validation tests for fuzzy-time-config.
// crates/fuzzy-time-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use fuzzy_time_config::ConfigError;
use fuzzy_time_config::FuzzyTimeConfig;
use fuzzy_time_config::TimeCutoff;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<FuzzyTimeConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(FuzzyTimeConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(FuzzyTimeConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'a'; 65_537];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(FuzzyTimeConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(FuzzyTimeConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_rejects_unknown_settings() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"tolerance_ms = 5\n").map_err(|err| err.to_string())?;
    assert_invalid(FuzzyTimeConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn load_rejects_missing_explicit_path() -> TestResult {
    let path = Path::new("no-such-fuzzy-time.toml");
    assert_invalid(FuzzyTimeConfig::load(Some(path)), "config io error")?;
    Ok(())
}

#[test]
fn load_reads_valid_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"enabled = true\ncutoff = \"millisecond\"\n")
        .map_err(|err| err.to_string())?;
    let config = FuzzyTimeConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if !config.enabled {
        return Err("loaded config should enable fuzzy comparison".to_string());
    }
    if config.cutoff != TimeCutoff::Millisecond {
        return Err("loaded config should set millisecond cutoff".to_string());
    }
    Ok(())
}

#[test]
fn load_defaults_when_no_file_present() -> TestResult {
    let config = FuzzyTimeConfig::load(None).map_err(|err| err.to_string())?;
    if config != FuzzyTimeConfig::default() {
        return Err("absent default-location file should yield defaults".to_string());
    }
    Ok(())
}
