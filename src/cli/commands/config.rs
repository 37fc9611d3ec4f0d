//! Config command: initialize and display triage configuration.

use anyhow::Context;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::args::ConfigAction;
use crate::config::settings::Config;

/// Execute the `config` subcommand (init, show).
pub fn cmd_config(action: ConfigAction) -> anyhow::Result<ExitCode> {
    match action {
        ConfigAction::Init { path } => cmd_init(path),
        ConfigAction::Show { path } => cmd_show(path),
    }
}

/// Write the default alerts/triage/journal sections to a fresh file.
fn cmd_init(path: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let config_path = path.unwrap_or_else(Config::default_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    let toml = Config::default()
        .to_toml()
        .context("Failed to serialize default config")?;
    std::fs::write(&config_path, toml)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;

    debug!(path = %config_path.display(), "Config file created");
    println!("Created config at: {}", config_path.display());
    Ok(ExitCode::SUCCESS)
}

/// Print the effective configuration.
///
/// An existing file is parsed and re-rendered, so stale or misspelled
/// keys surface as errors here rather than silently at triage time.
/// Without a file, the built-in defaults are shown.
fn cmd_show(path: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let config_path = path.unwrap_or_else(Config::default_config_path);

    let config = if config_path.exists() {
        println!("# Effective config from {}", config_path.display());
        Config::from_file(&config_path)
            .with_context(|| format!("Failed to load config file '{}'", config_path.display()))?
    } else {
        println!(
            "# No config file at {}; showing built-in defaults",
            config_path.display()
        );
        println!("# Run 'ids-triage config init' to create one.");
        Config::default()
    };

    print!("{}", config.to_toml().context("Failed to render config")?);
    debug!(path = %config_path.display(), "Config displayed");
    Ok(ExitCode::SUCCESS)
}
