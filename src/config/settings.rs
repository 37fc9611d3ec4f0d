//! Configuration management for ids-triage.

use crate::triage::severity::{AlertAction, Severity};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub alerts: AlertsConfig,
    pub triage: TriageConfig,
    pub journal: JournalSettings,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config from the default path, or defaults if absent.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::default_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ids-triage")
            .join("config.toml")
    }

    /// Get the alert action for a given severity.
    pub fn action_for(&self, severity: Severity) -> AlertAction {
        match severity {
            Severity::Low => self.alerts.low,
            Severity::Medium => self.alerts.medium,
            Severity::High => self.alerts.high,
            Severity::Critical => self.alerts.critical,
        }
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Per-severity alert action configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    #[serde(with = "alert_action_serde")]
    pub low: AlertAction,
    #[serde(with = "alert_action_serde")]
    pub medium: AlertAction,
    #[serde(with = "alert_action_serde")]
    pub high: AlertAction,
    #[serde(with = "alert_action_serde")]
    pub critical: AlertAction,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            low: AlertAction::Silent,
            medium: AlertAction::Notify,
            high: AlertAction::Notify,
            critical: AlertAction::Sound,
        }
    }
}

/// Triage behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Lowest severity included in triage output.
    pub min_severity: Severity,
    /// Exit non-zero when any High/Critical detection survives the filter.
    pub fail_on_alert: bool,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Low,
            fail_on_alert: true,
        }
    }
}

/// Detection journal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalSettings {
    /// Enable journaling of classified detections
    pub enabled: bool,
    /// Journal file path [default: platform data dir]
    pub path: Option<PathBuf>,
    /// Maximum journal file size in bytes before rotation
    pub max_file_bytes: u64,
    /// Number of rotated files to keep
    pub max_rotated_files: u32,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: None,
            max_file_bytes: 10 * 1024 * 1024, // 10 MB
            max_rotated_files: 5,
        }
    }
}

impl JournalSettings {
    /// Resolve the journal path: configured, or the default data dir.
    pub fn resolve_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ids-triage")
                .join("journal.jsonl")
        })
    }
}

/// Serde helper for AlertAction.
mod alert_action_serde {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(action: &AlertAction, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match action {
            AlertAction::Silent => "silent",
            AlertAction::Notify => "notify",
            AlertAction::Sound => "sound",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<AlertAction, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AlertAction::from_str_opt(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid alert action: {}", s)))
    }
}
