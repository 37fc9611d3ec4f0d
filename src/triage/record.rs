//! Detection log records as produced by the detection API.

use crate::triage::classifier::{classify, Verdict};
use crate::triage::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One detection event, as logged by the detection backend.
///
/// Field names follow the backend's JSON shape. Network features are
/// carried through untouched; only `result`, `attack_type` and
/// `confidence` feed the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    // Network features
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub protocol_type: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub flag: String,

    // Model output
    pub result: Verdict,
    #[serde(default)]
    pub attack_type: Option<String>,
    pub confidence: f64,
}

impl DetectionRecord {
    /// Classify this record.
    ///
    /// A missing `attack_type` (normal traffic logs it as null) behaves
    /// like an unrecognized name: the confidence baseline stands.
    pub fn severity(&self) -> Severity {
        classify(
            self.confidence,
            self.attack_type.as_deref().unwrap_or(""),
            self.result,
        )
    }

    /// Annotate the record with its computed severity.
    pub fn classified(self) -> ClassifiedRecord {
        let severity = self.severity();
        ClassifiedRecord {
            record: self,
            severity,
        }
    }
}

/// A detection record together with its computed severity.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: DetectionRecord,
    pub severity: Severity,
}

impl ClassifiedRecord {
    /// One-line text rendering for triage output.
    pub fn summary_line(&self) -> String {
        let when = self
            .record
            .timestamp
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        let attack = self.record.attack_type.as_deref().unwrap_or("-");
        format!(
            "{}  {:>8}  {}  {} ({:.2})",
            when,
            self.severity.paint(),
            self.record.result,
            attack,
            self.record.confidence
        )
    }
}
