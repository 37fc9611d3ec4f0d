//! Command-line argument parsing.

use crate::triage::severity::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ids-triage - severity triage for intrusion-detection logs
#[derive(Parser, Debug)]
#[command(name = "ids-triage")]
#[command(author, version, about, long_about = None)]
#[command(about = "ids-triage - Classify and triage intrusion-detection outcomes by severity")]
pub struct Cli {
    /// Logging verbosity level
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Logging output format
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: crate::logging::LogFormat,

    /// Control color output (auto, always, never). Respects NO_COLOR env var.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single detection outcome
    Classify {
        /// Model confidence score, expected in [0, 1]
        #[arg(short, long)]
        confidence: f64,

        /// Attack category name (e.g. neptune, portsweep)
        #[arg(short, long, default_value = "")]
        attack_type: String,

        /// Detection result tag: ATTACK or NORMAL
        #[arg(short, long, default_value = "ATTACK")]
        result: String,

        /// Output format: text, json
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,

        /// Append the classified outcome to the detection journal
        #[arg(long)]
        journal: bool,
    },

    /// Triage a JSON-lines detection log
    Triage {
        /// Detection log to triage (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Lowest severity to include in the output
        #[arg(short, long, value_enum)]
        min_severity: Option<Severity>,

        /// Output format: text, json
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,

        /// Suppress stdout output, only set exit code
        #[arg(short, long)]
        quiet: bool,

        /// Append classified detections to the detection journal
        #[arg(long)]
        journal: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default configuration
    Init {
        /// Path to create config file
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show the effective configuration
    Show {
        /// Path to read instead of the default config file
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

/// Logging verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

impl clap::ValueEnum for Severity {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }))
    }
}

/// Triage exit codes with distinct semantics.
/// 0 = clean, 1 = alert (High/Critical present), 2 = error.
pub const EXIT_CLEAN: u8 = 0;
pub const EXIT_ALERT: u8 = 1;
pub const EXIT_ERROR: u8 = 2;
