//! ids-triage — severity triage for intrusion-detection logs.
//!
//! Classifies detection outcomes (confidence score + attack type) into
//! four severity levels, annotates and summarizes JSON-lines detection
//! logs, and keeps an append-only journal of classified detections.

pub mod cli;
pub mod config;
pub mod logging;
pub mod triage;
