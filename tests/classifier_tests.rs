use ids_triage::triage::classifier::{classify, Verdict};
use ids_triage::triage::severity::Severity;

#[test]
fn normal_traffic_is_always_low() {
    // NORMAL short-circuits regardless of confidence or attack type
    assert_eq!(classify(0.99, "anything", Verdict::Normal), Severity::Low);
    assert_eq!(classify(0.0, "", Verdict::Normal), Severity::Low);
    assert_eq!(classify(1.0, "neptune", Verdict::Normal), Severity::Low);
}

#[test]
fn unknown_attack_uses_confidence_baseline() {
    assert_eq!(
        classify(0.95, "unknownattack", Verdict::Attack),
        Severity::Critical
    );
    assert_eq!(
        classify(0.80, "unknownattack", Verdict::Attack),
        Severity::High
    );
    assert_eq!(
        classify(0.60, "unknownattack", Verdict::Attack),
        Severity::Medium
    );
    assert_eq!(
        classify(0.30, "unknownattack", Verdict::Attack),
        Severity::Low
    );
}

#[test]
fn critical_tier_escalates_one_step() {
    // Baseline High -> Critical
    assert_eq!(classify(0.80, "neptune", Verdict::Attack), Severity::Critical);
    // Baseline Medium -> High
    assert_eq!(classify(0.60, "smurf", Verdict::Attack), Severity::High);
    // Baseline Low -> Medium
    assert_eq!(classify(0.30, "teardrop", Verdict::Attack), Severity::Medium);
}

#[test]
fn critical_tier_already_critical_stays_capped() {
    assert_eq!(classify(0.95, "neptune", Verdict::Attack), Severity::Critical);
}

#[test]
fn high_risk_tier_escalates_below_critical() {
    // Baseline Medium -> High
    assert_eq!(classify(0.60, "portsweep", Verdict::Attack), Severity::High);
    // Baseline Low -> Medium
    assert_eq!(classify(0.30, "nmap", Verdict::Attack), Severity::Medium);
}

#[test]
fn high_risk_tier_never_reaches_critical() {
    // Baseline High stays High; recon escalation stops below Critical
    assert_eq!(classify(0.80, "portsweep", Verdict::Attack), Severity::High);
    assert_eq!(classify(0.89, "satan", Verdict::Attack), Severity::High);
    // Baseline Critical is untouched
    assert_eq!(classify(0.95, "ipsweep", Verdict::Attack), Severity::Critical);
}

#[test]
fn attack_type_matching_is_case_insensitive() {
    assert_eq!(
        classify(0.95, "NEPTUNE", Verdict::Attack),
        classify(0.95, "neptune", Verdict::Attack)
    );
    assert_eq!(classify(0.80, "Neptune", Verdict::Attack), Severity::Critical);
    assert_eq!(classify(0.60, "PortSweep", Verdict::Attack), Severity::High);
}

#[test]
fn empty_attack_type_matches_neither_tier() {
    assert_eq!(classify(0.60, "", Verdict::Attack), Severity::Medium);
}

#[test]
fn back_is_high_risk_tier() {
    // "back" escalates like recon, not like the DoS tier
    assert_eq!(classify(0.80, "back", Verdict::Attack), Severity::High);
    assert_eq!(classify(0.60, "back", Verdict::Attack), Severity::High);
}

#[test]
fn classification_is_idempotent() {
    let first = classify(0.77, "smurf", Verdict::Attack);
    let second = classify(0.77, "smurf", Verdict::Attack);
    assert_eq!(first, second);
}

#[test]
fn out_of_range_confidence_falls_through_thresholds() {
    // No validation: above 1.0 still lands in the Critical bracket,
    // negative values land in Low
    assert_eq!(classify(1.5, "other", Verdict::Attack), Severity::Critical);
    assert_eq!(classify(-0.2, "other", Verdict::Attack), Severity::Low);
    assert_eq!(classify(f64::NAN, "other", Verdict::Attack), Severity::Low);
}

// Concrete scenarios from the detection dashboard
#[test]
fn dashboard_scenarios() {
    assert_eq!(classify(0.95, "neptune", Verdict::Attack), Severity::Critical);
    assert_eq!(classify(0.80, "neptune", Verdict::Attack), Severity::Critical);
    assert_eq!(classify(0.60, "portsweep", Verdict::Attack), Severity::High);
    assert_eq!(
        classify(0.30, "unknownattack", Verdict::Attack),
        Severity::Low
    );
    assert_eq!(classify(0.99, "anything", Verdict::Normal), Severity::Low);
}
