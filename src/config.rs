//! Runtime configuration
//!
//! Everything comes from environment variables:
//!
//! - `MEALPLAN_SNAPSHOT_PATH`: snapshot JSON file (default `<project>/data/snapshot.json`)
//! - `MEALPLAN_PERSON`: whose plans and tracker to report on (default `Sarah`)
//! - `MEALPLAN_OUTPUT`: `json` or `text` (default `json`)

use std::path::PathBuf;

use crate::error::{MealplanError, MealplanResult};

pub const SNAPSHOT_PATH_VAR: &str = "MEALPLAN_SNAPSHOT_PATH";
pub const PERSON_VAR: &str = "MEALPLAN_PERSON";
pub const OUTPUT_VAR: &str = "MEALPLAN_OUTPUT";

pub const DEFAULT_PERSON: &str = "Sarah";

/// How the binaries print reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(s: &str) -> MealplanResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(MealplanError::Parse(format!(
                "{} must be 'json' or 'text', got '{}'",
                OUTPUT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub person: String,
    pub output: OutputFormat,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> MealplanResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset or empty keys use defaults
    pub fn from_lookup<F>(lookup: F) -> MealplanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output = match get(OUTPUT_VAR) {
            Some(value) => OutputFormat::parse(&value)?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            snapshot_path: get(SNAPSHOT_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_snapshot_path),
            person: get(PERSON_VAR).unwrap_or_else(|| DEFAULT_PERSON.to_string()),
            output,
        })
    }
}

/// `data/snapshot.json` under the project root
///
/// The root is the executable's directory, or two levels up when running
/// from `target/debug` or `target/release`.
pub fn default_snapshot_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("snapshot.json");
    path
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.person, "Sarah");
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.snapshot_path.ends_with("data/snapshot.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (SNAPSHOT_PATH_VAR, "/tmp/export.json"),
            (PERSON_VAR, "Stuart"),
            (OUTPUT_VAR, "TEXT"),
        ]))
        .unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/export.json"));
        assert_eq!(config.person, "Stuart");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = Config::from_lookup(lookup(&[(PERSON_VAR, "  "), (OUTPUT_VAR, "")])).unwrap();
        assert_eq!(config.person, "Sarah");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_output_format() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(OUTPUT_VAR, "xml")])),
            Err(MealplanError::Parse(_))
        ));
    }
}
