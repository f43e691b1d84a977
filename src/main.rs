use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use clap::Parser;

use repo_pulse::cli::Cli;
use repo_pulse::config::ConfigService;
use repo_pulse::error::{ErrorCode, PulseError};
use repo_pulse::git::{self, GitCli};
use repo_pulse::service::Analyzer;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", render_error(&e));
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One diagnostic line per fatal error; stdout stays reserved for the
/// report.
fn render_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<PulseError>() {
        Some(pulse) => pulse.to_string(),
        None => format!("[{}] {e}", ErrorCode::IoError),
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

fn run(cli: Cli) -> Result<()> {
    let config = ConfigService::load(cli.config.as_deref())
        .map_err(|e| PulseError::new(ErrorCode::ConfigError, format!("{e:#}")))?;

    let _log_guard = if cli.debug || config.debug {
        Some(repo_pulse::logger::init(&config)?)
    } else {
        None
    };

    // Switch the working context before any analysis; every git
    // invocation runs in the current directory.
    if let Some(dir) = &cli.repo_path {
        std::env::set_current_dir(dir).map_err(|e| {
            PulseError::new(
                ErrorCode::ConfigError,
                format!("Failed to change to directory {}: {e}", dir.display()),
            )
        })?;
    }

    if !git::is_repository(Path::new(".")) {
        bail!(PulseError::not_a_repository());
    }

    eprintln!("Analyzing repository... (last {} commits)", cli.commits);

    let source = GitCli;
    let report = Analyzer::new(&source).analyze(cli.commits)?;

    let mut output = serde_json::to_string_pretty(&report)?;
    output.push('\n');

    match &cli.output {
        Some(path) => {
            fs::write(path, &output).map_err(|e| {
                PulseError::new(
                    ErrorCode::IoError,
                    format!("Failed to write {}: {e}", path.display()),
                )
            })?;
            eprintln!("Analysis saved to {}", path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}
