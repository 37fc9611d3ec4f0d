//! Triage over a JSON-lines detection log.

use crate::triage::record::{ClassifiedRecord, DetectionRecord};
use crate::triage::severity::Severity;
use std::io::BufRead;
use thiserror::Error;
use tracing::warn;

/// Errors from reading a detection log.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Failed to read detection log: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of triaging a detection log.
#[derive(Debug)]
pub struct TriageResult {
    records: Vec<ClassifiedRecord>,
    summary: TriageSummary,
}

impl TriageResult {
    /// The classified records that passed the severity filter.
    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    pub fn summary(&self) -> &TriageSummary {
        &self.summary
    }

    /// Whether any surviving record is High or Critical.
    pub fn has_alert(&self) -> bool {
        self.summary.alert_count() > 0
    }
}

/// Per-severity counts for a triaged log.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct TriageSummary {
    pub total: usize,
    pub attacks: usize,
    pub normal: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
    /// Lines that failed to parse and were skipped.
    pub malformed: usize,
}

impl TriageSummary {
    /// Fold one classified record into the counts.
    pub fn add(&mut self, rec: &ClassifiedRecord) {
        self.total += 1;
        if rec.record.result.is_attack() {
            self.attacks += 1;
        } else {
            self.normal += 1;
        }
        match rec.severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
        }
    }

    /// Count for one severity level.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    /// Detections that warrant an alert (High + Critical).
    pub fn alert_count(&self) -> usize {
        self.high + self.critical
    }

    /// Highest severity seen, or None for an empty log.
    pub fn max_severity(&self) -> Option<Severity> {
        Severity::all()
            .into_iter()
            .rev()
            .find(|s| self.count(*s) > 0)
    }

    /// Generate a human-readable report.
    pub fn report(&self) -> String {
        if self.total == 0 {
            let mut report = "No detections triaged.".to_string();
            if self.malformed > 0 {
                report.push_str(&format!(
                    "\nSkipped {} malformed line(s)\n",
                    self.malformed
                ));
            }
            return report;
        }

        let mut report = format!(
            "Triaged: {} ({} attacks, {} normal)\n",
            self.total, self.attacks, self.normal
        );
        for severity in Severity::all().into_iter().rev() {
            report.push_str(&format!("- {}: {}\n", severity, self.count(severity)));
        }
        if self.malformed > 0 {
            report.push_str(&format!("Skipped {} malformed line(s)\n", self.malformed));
        }
        report
    }
}

/// Triage a JSON-lines detection log.
///
/// Malformed lines are skipped with a warning and counted in the
/// summary; records below `min_severity` are counted but not returned.
pub fn triage_log<R: BufRead>(
    reader: R,
    min_severity: Severity,
) -> Result<TriageResult, TriageError> {
    let mut records = Vec::new();
    let mut summary = TriageSummary::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: DetectionRecord = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "Skipping malformed detection record");
                summary.malformed += 1;
                continue;
            }
        };

        let classified = record.classified();
        summary.add(&classified);
        if classified.severity >= min_severity {
            records.push(classified);
        }
    }

    Ok(TriageResult { records, summary })
}
