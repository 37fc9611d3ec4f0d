use ids_triage::triage::severity::Severity;
use ids_triage::triage::summary::triage_log;
use std::io::Cursor;

const SAMPLE_LOG: &str = r#"{"result": "ATTACK", "attack_type": "neptune", "confidence": 0.95}
{"result": "ATTACK", "attack_type": "portsweep", "confidence": 0.60}
{"result": "ATTACK", "attack_type": "unknownattack", "confidence": 0.30}
{"result": "NORMAL", "attack_type": null, "confidence": 0.99}
"#;

#[test]
fn triage_counts_by_severity() {
    let result = triage_log(Cursor::new(SAMPLE_LOG), Severity::Low).unwrap();
    let summary = result.summary();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.attacks, 3);
    assert_eq!(summary.normal, 1);
    assert_eq!(summary.critical, 1);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.medium, 0);
    assert_eq!(summary.low, 2);
    assert_eq!(summary.malformed, 0);
}

#[test]
fn min_severity_filters_returned_records() {
    let result = triage_log(Cursor::new(SAMPLE_LOG), Severity::High).unwrap();

    // Counts cover everything; only High+ records are returned
    assert_eq!(result.summary().total, 4);
    assert_eq!(result.records().len(), 2);
    assert!(result.records().iter().all(|r| r.severity >= Severity::High));
}

#[test]
fn alert_detection() {
    let result = triage_log(Cursor::new(SAMPLE_LOG), Severity::Low).unwrap();
    assert!(result.has_alert());
    assert_eq!(result.summary().alert_count(), 2);

    let quiet_log = r#"{"result": "NORMAL", "confidence": 0.9}"#;
    let result = triage_log(Cursor::new(quiet_log), Severity::Low).unwrap();
    assert!(!result.has_alert());
}

#[test]
fn malformed_lines_are_skipped_and_counted() {
    let log = "not json\n{\"result\": \"ATTACK\", \"confidence\": 0.95}\n{broken\n";
    let result = triage_log(Cursor::new(log), Severity::Low).unwrap();

    assert_eq!(result.summary().malformed, 2);
    assert_eq!(result.summary().total, 1);
    assert_eq!(result.records().len(), 1);
}

#[test]
fn blank_lines_are_ignored() {
    let log = "\n\n{\"result\": \"NORMAL\", \"confidence\": 0.5}\n\n";
    let result = triage_log(Cursor::new(log), Severity::Low).unwrap();
    assert_eq!(result.summary().total, 1);
    assert_eq!(result.summary().malformed, 0);
}

#[test]
fn empty_log_has_no_max_severity() {
    let result = triage_log(Cursor::new(""), Severity::Low).unwrap();
    assert_eq!(result.summary().max_severity(), None);
    assert_eq!(result.summary().report(), "No detections triaged.");
}

#[test]
fn max_severity_is_highest_seen() {
    let result = triage_log(Cursor::new(SAMPLE_LOG), Severity::Low).unwrap();
    assert_eq!(result.summary().max_severity(), Some(Severity::Critical));

    let log = r#"{"result": "ATTACK", "attack_type": "nmap", "confidence": 0.3}"#;
    let result = triage_log(Cursor::new(log), Severity::Low).unwrap();
    assert_eq!(result.summary().max_severity(), Some(Severity::Medium));
}

#[test]
fn report_lists_all_levels() {
    let result = triage_log(Cursor::new(SAMPLE_LOG), Severity::Low).unwrap();
    let report = result.summary().report();

    assert!(report.contains("Triaged: 4 (3 attacks, 1 normal)"));
    assert!(report.contains("- CRITICAL: 1"));
    assert!(report.contains("- HIGH: 1"));
    assert!(report.contains("- MEDIUM: 0"));
    assert!(report.contains("- LOW: 2"));
}

#[test]
fn report_mentions_malformed_lines() {
    let log = "garbage\n";
    let result = triage_log(Cursor::new(log), Severity::Low).unwrap();
    // A log with only malformed lines still reports the skip count
    assert_eq!(result.summary().total, 0);
    let report = result.summary().report();
    assert!(report.contains("No detections triaged."));
    assert!(report.contains("Skipped 1 malformed line(s)"));
}

#[test]
fn report_mixed_log_includes_malformed_count() {
    let log = "{broken\n{\"result\": \"ATTACK\", \"confidence\": 0.95}\n";
    let result = triage_log(Cursor::new(log), Severity::Low).unwrap();
    let report = result.summary().report();
    assert!(report.contains("Triaged: 1"));
    assert!(report.contains("Skipped 1 malformed line(s)"));
}
