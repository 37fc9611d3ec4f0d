//! Classify command: severity for a single detection outcome.

use colored::*;
use std::process::ExitCode;
use tracing::{debug, info};

use crate::cli::args::{OutputFormat, EXIT_ALERT, EXIT_CLEAN};
use crate::config::Config;
use crate::logging::journal::{DetectionJournal, JournalConfig};
use crate::triage::classifier::{classify, Verdict};
use crate::triage::record::DetectionRecord;

pub fn cmd_classify(
    confidence: f64,
    attack_type: &str,
    result: &str,
    format: OutputFormat,
    journal: bool,
) -> anyhow::Result<ExitCode> {
    let config = Config::load_or_default()?;

    let verdict: Verdict = result.parse().unwrap_or(Verdict::Attack);
    let severity = classify(confidence, attack_type, verdict);
    let action = config.action_for(severity);
    info!(
        confidence,
        attack_type,
        verdict = %verdict,
        severity = %severity,
        "Outcome classified"
    );

    if journal || config.journal.enabled {
        let record = DetectionRecord {
            timestamp: None,
            duration: 0,
            protocol_type: String::new(),
            service: String::new(),
            flag: String::new(),
            result: verdict,
            attack_type: (!attack_type.is_empty()).then(|| attack_type.to_string()),
            confidence,
        };
        let path = config.journal.resolve_path();
        let journal = DetectionJournal::open(
            &path,
            JournalConfig {
                max_file_bytes: config.journal.max_file_bytes,
                max_rotated_files: config.journal.max_rotated_files,
            },
        )?;
        journal.record(&record.classified())?;
        debug!(path = %path.display(), "Outcome journaled");
    }

    match format {
        OutputFormat::Text => {
            let marker = if severity.is_alert() {
                "!".red().bold()
            } else {
                "✓".green()
            };
            println!("{} Severity: {}", marker, severity.paint());
            println!("Action: {:?}", action);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "severity": severity,
                "action": action,
                "is_alert": severity.is_alert(),
                "color": severity.color_hex(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(if severity.is_alert() {
        ExitCode::from(EXIT_ALERT)
    } else {
        ExitCode::from(EXIT_CLEAN)
    })
}
