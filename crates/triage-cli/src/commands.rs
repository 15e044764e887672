use super::args::{Cli, Commands, LogLevel, OutputFormat};
use super::handlers;
use super::logging;
use crate::presentation::create_view;
use anyhow::{Context, Result};
use clap::ValueEnum;
use triage_runtime::{Config, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let (level, rejected_level) = resolve_log_level(cli.log_level, &config.logging.level);
    logging::init(&level.to_string());

    tracing::debug!(
        path = %config_path.display(),
        exists = config_path.exists(),
        "resolved config"
    );
    if let Some(rejected) = rejected_level {
        tracing::warn!(configured = rejected, "invalid log level in config, using warn");
    }

    let format: OutputFormat = cli
        .format
        .unwrap_or_else(|| config.output.format.into());
    let view = create_view(format);

    match cli.command {
        Some(Commands::Rules) => handlers::rules::handle(view.as_ref()),
        None => {
            // clap enforces --input unless a subcommand is given
            let input = cli.input.context("the --input argument is required")?;
            handlers::triage::handle(&input, view.as_ref())
        }
    }
}

/// Pick the log level: the flag wins, then the configured value.
///
/// A configured value that is not a known level yields `Warn` together
/// with the rejected string.
fn resolve_log_level(flag: Option<LogLevel>, configured: &str) -> (LogLevel, Option<&str>) {
    if let Some(level) = flag {
        return (level, None);
    }

    match <LogLevel as ValueEnum>::from_str(configured.trim(), true) {
        Ok(level) => (level, None),
        Err(_) => (LogLevel::Warn, Some(configured)),
    }
}
