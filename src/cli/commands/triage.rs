//! Triage command: annotate and summarize a detection log.

use anyhow::Context;
use colored::*;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, info_span};

use crate::cli::args::{OutputFormat, EXIT_ALERT, EXIT_CLEAN};
use crate::config::Config;
use crate::logging::journal::{DetectionJournal, JournalConfig};
use crate::triage::severity::Severity;
use crate::triage::summary::{triage_log, TriageResult};

pub fn cmd_triage(
    file: Option<&Path>,
    min_severity: Option<Severity>,
    format: OutputFormat,
    quiet: bool,
    journal: bool,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!(
        "triage",
        input_source = if file.is_some() { "file" } else { "stdin" }
    )
    .entered();

    let config = Config::load_or_default()?;
    let min_severity = min_severity.unwrap_or(config.triage.min_severity);
    debug!(min_severity = %min_severity, "Triage filter resolved");

    let start = Instant::now();
    let result = match file {
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("Failed to open detection log '{}'", path.display()))?;
            triage_log(BufReader::new(f), min_severity)?
        }
        None => triage_log(io::stdin().lock(), min_severity)?,
    };
    info!(
        total = result.summary().total,
        alerts = result.summary().alert_count(),
        malformed = result.summary().malformed,
        triage_duration_ms = start.elapsed().as_millis() as u64,
        "Triage complete"
    );

    if journal || config.journal.enabled {
        let path = config.journal.resolve_path();
        let journal = DetectionJournal::open(
            &path,
            JournalConfig {
                max_file_bytes: config.journal.max_file_bytes,
                max_rotated_files: config.journal.max_rotated_files,
            },
        )?;
        for entry in result.records() {
            journal.record(entry)?;
        }
        debug!(path = %path.display(), entries = result.records().len(), "Detections journaled");
    }

    if !quiet {
        print_result(&result, format)?;
    }

    let alert = config.triage.fail_on_alert && result.has_alert();
    Ok(if alert {
        ExitCode::from(EXIT_ALERT)
    } else {
        ExitCode::from(EXIT_CLEAN)
    })
}

fn print_result(result: &TriageResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in result.records() {
                println!("{}", entry.summary_line());
            }
            if !result.records().is_empty() {
                println!();
            }
            if result.has_alert() {
                println!("{} {}", "!".red().bold(), result.summary().report());
            } else {
                println!("{} {}", "✓".green(), result.summary().report());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "summary": result.summary(),
                "max_severity": result.summary().max_severity(),
                "detections": result.records(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
