use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use tag_balance::config::Config;
use tag_balance::report;
use tag_balance::validation::check_document_with;

fn run() -> Result<ExitCode> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(file) = &config.config_file {
        log::info!("using config {}", file.display());
    }

    let content = fs::read_to_string(&config.path)
        .with_context(|| format!("failed to read {}", config.path.display()))?;

    log::info!(
        "checking {} ({:?} mismatch policy)",
        config.path.display(),
        config.mismatch_policy
    );
    let result = check_document_with(&content, config.mismatch_policy);
    log::info!(
        "scanned {} lines, {} diagnostics{}",
        result.lines_scanned,
        result.diagnostics.len(),
        if result.halted { ", halted" } else { "" }
    );

    let rendered = report::render(config.format, &config.path, &result)?;
    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("failed to write report")?;

    Ok(if result.is_balanced() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
