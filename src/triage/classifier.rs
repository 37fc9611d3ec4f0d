//! Severity classification for detection outcomes.
//!
//! Maps a model confidence score and an attack-type name to one of four
//! severity levels: a confidence baseline, then a single escalation step
//! for attack families that are dangerous regardless of score.

use crate::triage::severity::Severity;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attack families that escalate one full step, up to Critical.
/// Flood and crash style attacks (DoS) that take hosts down outright.
pub const CRITICAL_TIER_ATTACKS: &[&str] = &["neptune", "smurf", "pod", "teardrop", "land"];

/// Recon and probe style attacks that escalate one step but never
/// reach Critical on their own.
pub const HIGH_RISK_TIER_ATTACKS: &[&str] = &["portsweep", "ipsweep", "satan", "nmap", "back"];

/// Whether the model called the traffic hostile at all.
///
/// The wire format carries this as a string; anything other than
/// `"NORMAL"` deserializes as `Attack`, matching how the upstream
/// detection API treats unrecognized labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Attack,
    Normal,
}

impl Verdict {
    pub fn is_attack(&self) -> bool {
        matches!(self, Verdict::Attack)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Attack => f.write_str("ATTACK"),
            Verdict::Normal => f.write_str("NORMAL"),
        }
    }
}

impl FromStr for Verdict {
    type Err = std::convert::Infallible;

    // Total on purpose: only the exact "NORMAL" tag means normal traffic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "NORMAL" {
            Ok(Verdict::Normal)
        } else {
            Ok(Verdict::Attack)
        }
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Verdict::Attack))
    }
}

/// Classify one detection outcome.
///
/// Normal traffic is always `Low`, regardless of confidence or attack
/// type. For attacks, the confidence baseline
/// (`Severity::from_confidence`) is escalated at most one step when the
/// attack name matches a tier list. Matching is case-insensitive; only
/// one tier applies per name, with the critical tier taking precedence.
///
/// Pure and total: no I/O, no state, never fails. Confidence outside
/// [0, 1] is the caller's problem and falls through the thresholds
/// unchanged.
pub fn classify(confidence: f64, attack_type: &str, verdict: Verdict) -> Severity {
    if verdict == Verdict::Normal {
        return Severity::Low;
    }

    let baseline = Severity::from_confidence(confidence);
    let attack = attack_type.to_lowercase();

    if is_critical_tier(&attack) {
        baseline.escalate()
    } else if is_high_risk_tier(&attack) {
        // Recon escalation stops below Critical
        match baseline {
            Severity::Low => Severity::Medium,
            Severity::Medium => Severity::High,
            other => other,
        }
    } else {
        baseline
    }
}

/// Check membership in the critical attack tier (expects lowercase input).
fn is_critical_tier(attack: &str) -> bool {
    CRITICAL_TIER_ATTACKS.contains(&attack)
}

/// Check membership in the high-risk attack tier (expects lowercase input).
fn is_high_risk_tier(attack: &str) -> bool {
    HIGH_RISK_TIER_ATTACKS.contains(&attack)
}
