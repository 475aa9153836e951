pub mod cli;
pub mod core;

use crate::cli::inputs::{FixedDepositRequest, MonthlyRequest, PpfRequest};
use crate::cli::report::Report;
use crate::core::Instrument;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    Ppf(PpfRequest),
    FixedDeposit(FixedDepositRequest),
    Sip(MonthlyRequest),
    RecurringDeposit(MonthlyRequest),
}

impl AppCommand {
    /// Fills every missing input from `config` and clamps it to range.
    pub fn resolve(&self, config: &AppConfig) -> Instrument {
        match self {
            AppCommand::Ppf(request) => request.resolve(config),
            AppCommand::FixedDeposit(request) => request.resolve(config),
            AppCommand::Sip(request) => request.resolve_sip(config),
            AppCommand::RecurringDeposit(request) => request.resolve_rd(config),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runs one calculator and returns the rendered report.
pub fn render_command(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let instrument = command.resolve(&config);
    info!(calculator = instrument.name(), "Calculating maturity");
    let report = Report::new(instrument);

    match format {
        OutputFormat::Text => Ok(report.display_as_text()),
        OutputFormat::Json => report.to_json(),
    }
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let output = render_command(command, config_path, format)?;
    println!("{output}");
    Ok(())
}
