//! CLI command implementations.
//!
//! Each submodule implements one top-level CLI command (classify,
//! triage, config).

pub mod classify;
pub mod config;
pub mod triage;

pub use classify::cmd_classify;
pub use config::cmd_config;
pub use triage::cmd_triage;
