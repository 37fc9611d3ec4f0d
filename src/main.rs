use clap::{CommandFactory, Parser};
use colored::*;
use ids_triage::cli::args::{Cli, ColorMode, Commands};
use ids_triage::cli::commands::{cmd_classify, cmd_config, cmd_triage};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    // Initialize structured logging before any command runs.
    // log_level/log_format are consumed here; only command is forwarded.
    if let Err(e) = ids_triage::logging::init(cli.log_level.into(), cli.log_format) {
        eprintln!("{}: Failed to initialize logging: {}", "Error".red().bold(), e);
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(ids_triage::cli::args::EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Classify {
            confidence,
            attack_type,
            result,
            format,
            journal,
        } => cmd_classify(confidence, &attack_type, &result, format, journal),
        Commands::Triage {
            file,
            min_severity,
            format,
            quiet,
            journal,
        } => cmd_triage(file.as_deref(), min_severity, format, quiet, journal),
        Commands::Config { action } => cmd_config(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let shell = match shell {
                ids_triage::cli::args::CompletionShell::Bash => clap_complete::Shell::Bash,
                ids_triage::cli::args::CompletionShell::Zsh => clap_complete::Shell::Zsh,
                ids_triage::cli::args::CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "ids-triage", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
