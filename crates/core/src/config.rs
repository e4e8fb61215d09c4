//! # Greenhouse Configuration
//!
//! Layered settings: built-in defaults, then `.greenhouse/config.json` if it
//! exists, then environment variables. The server applies CLI flags last.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Default location of the optional JSON config file
pub const DEFAULT_CONFIG_PATH: &str = ".greenhouse/config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GreenhouseConfig {
    pub host: String,
    pub port: u16,
    /// Week shown when a request names none
    pub current_week: String,
    /// Week new submissions are planted in
    pub submission_week: String,
}

impl Default for GreenhouseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            current_week: "week33".to_string(),
            submission_week: "week34".to_string(),
        }
    }
}

impl GreenhouseConfig {
    /// Defaults, overlaid with the config file and the process environment
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH)).with_env(|key| std::env::var(key).ok())
    }

    /// Read `path` if present; a missing or unreadable file falls back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config file: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Overlay `PORT`, `GREENHOUSE_HOST`, `GREENHOUSE_CURRENT_WEEK` and
    /// `GREENHOUSE_SUBMISSION_WEEK` as reported by `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        override_from(&lookup, "PORT", &mut self.port);
        override_from(&lookup, "GREENHOUSE_HOST", &mut self.host);
        override_from(&lookup, "GREENHOUSE_CURRENT_WEEK", &mut self.current_week);
        override_from(&lookup, "GREENHOUSE_SUBMISSION_WEEK", &mut self.submission_week);
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn override_from<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T)
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(e) => tracing::warn!("Invalid {key} value {raw:?}: {e}, keeping current setting"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GreenhouseConfig::load_from(Path::new("/nonexistent/greenhouse.json"));
        assert_eq!(config, GreenhouseConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"port": 8081, "submission_week": "week40"}"#).unwrap();

        let config = GreenhouseConfig::load_from(&path);
        assert_eq!(config.port, 8081);
        assert_eq!(config.submission_week, "week40");
        assert_eq!(config.current_week, "week33");
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(GreenhouseConfig::read_file(&path).is_err());
        assert_eq!(GreenhouseConfig::load_from(&path), GreenhouseConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "4242"),
            ("GREENHOUSE_CURRENT_WEEK", "week32"),
            ("GREENHOUSE_HOST", "0.0.0.0"),
        ]
        .into_iter()
        .collect();

        let config =
            GreenhouseConfig::default().with_env(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 4242);
        assert_eq!(config.current_week, "week32");
        assert_eq!(config.address(), "0.0.0.0:4242");
        assert_eq!(config.submission_week, "week34");
    }

    #[test]
    fn test_bad_port_is_ignored() {
        let config = GreenhouseConfig::default().with_env(|key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.port, 3000);
    }
}
