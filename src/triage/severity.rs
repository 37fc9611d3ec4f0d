//! Severity levels and alert-action mapping.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity assigned to a detection for triage and display.
///
/// Variants are declared lowest to highest so the derived `Ord` gives
/// `Low < Medium < High < Critical`. Escalation and min-severity
/// filtering both rely on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Normal traffic or low-confidence attack
    Low,
    /// Moderate-confidence attack, worth reviewing
    Medium,
    /// High-confidence attack, needs attention
    High,
    /// Near-certain or inherently dangerous attack
    Critical,
}

impl Severity {
    /// Baseline severity from a model confidence score.
    ///
    /// Thresholds are inclusive on the lower bound: exactly 0.90 is
    /// Critical, exactly 0.75 is High, exactly 0.50 is Medium. Confidence
    /// is not validated; out-of-range values fall through the same
    /// comparisons so the function stays total.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.90 {
            Severity::Critical
        } else if confidence >= 0.75 {
            Severity::High
        } else if confidence >= 0.50 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// One step up the ordering, capped at Critical.
    pub fn escalate(self) -> Self {
        match self {
            Severity::Low => Severity::Medium,
            Severity::Medium => Severity::High,
            Severity::High => Severity::Critical,
            Severity::Critical => Severity::Critical,
        }
    }

    /// Whether this severity should raise an alert (High or Critical).
    pub fn is_alert(&self) -> bool {
        *self >= Severity::High
    }

    /// Get the default alert action for this severity.
    pub fn default_action(&self) -> AlertAction {
        match self {
            Severity::Low => AlertAction::Silent,
            Severity::Medium => AlertAction::Notify,
            Severity::High => AlertAction::Notify,
            Severity::Critical => AlertAction::Sound,
        }
    }

    /// Hex color used for severity badges.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Severity::Low => "#3B82F6",
            Severity::Medium => "#EAB308",
            Severity::High => "#F59E0B",
            Severity::Critical => "#EF4444",
        }
    }

    /// The uppercase label as a plain string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Terminal rendering of the label, colored to match the badge hex.
    pub fn paint(&self) -> ColoredString {
        match self {
            Severity::Low => self.as_str().blue(),
            Severity::Medium => self.as_str().yellow(),
            Severity::High => self.as_str().truecolor(245, 158, 11), // Amber
            Severity::Critical => self.as_str().red().bold(),
        }
    }

    /// All severities, lowest first.
    pub fn all() -> [Severity; 4] {
        [
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Severity::Low),
            "MEDIUM" => Ok(Severity::Medium),
            "HIGH" => Ok(Severity::High),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Error for an unrecognized severity label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity level: {0}")]
pub struct ParseSeverityError(pub String);

/// Action to take when a detection reaches a given severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertAction {
    /// Record only, no notification
    Silent,
    /// Raise a dashboard notification
    Notify,
    /// Raise a notification and play the alert sound
    Sound,
}

impl AlertAction {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" => Some(AlertAction::Silent),
            "notify" => Some(AlertAction::Notify),
            "sound" => Some(AlertAction::Sound),
            _ => None,
        }
    }
}
