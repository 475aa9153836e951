use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use fincalc::cli::inputs::{FixedDepositRequest, MonthlyRequest, PpfRequest};
use fincalc::core::InterestType;
use fincalc::core::log::init_logging;
use fincalc::{AppCommand, OutputFormat};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Print the result and chart as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Public Provident Fund maturity
    Ppf(PpfArgs),
    /// Fixed deposit maturity
    Fd(FdArgs),
    /// Systematic investment plan maturity
    Sip(MonthlyArgs),
    /// Recurring deposit maturity
    Rd(MonthlyArgs),
}

#[derive(Args)]
struct PpfArgs {
    /// Yearly investment in rupees
    #[arg(short, long)]
    amount: Option<f64>,

    /// Time period in years
    #[arg(short, long)]
    years: Option<f64>,
}

#[derive(Args)]
struct FdArgs {
    /// Total investment in rupees
    #[arg(short, long)]
    amount: Option<f64>,

    /// Rate of interest (% p.a)
    #[arg(short, long)]
    rate: Option<f64>,

    /// Time period in years
    #[arg(short, long)]
    years: Option<f64>,

    /// How interest accrues
    #[arg(short, long, value_enum)]
    interest_type: Option<InterestTypeArg>,
}

#[derive(Args)]
struct MonthlyArgs {
    /// Monthly investment in rupees
    #[arg(short, long)]
    amount: Option<f64>,

    /// Rate of return (% p.a)
    #[arg(short, long)]
    rate: Option<f64>,

    /// Time period in years
    #[arg(short, long)]
    years: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum InterestTypeArg {
    Simple,
    Compound,
}

impl From<InterestTypeArg> for InterestType {
    fn from(arg: InterestTypeArg) -> InterestType {
        match arg {
            InterestTypeArg::Simple => InterestType::Simple,
            InterestTypeArg::Compound => InterestType::Compound,
        }
    }
}

impl From<MonthlyArgs> for MonthlyRequest {
    fn from(args: MonthlyArgs) -> MonthlyRequest {
        MonthlyRequest {
            monthly_investment: args.amount,
            rate: args.rate,
            years: args.years,
        }
    }
}

impl From<Commands> for AppCommand {
    fn from(cmd: Commands) -> AppCommand {
        match cmd {
            Commands::Ppf(args) => AppCommand::Ppf(PpfRequest {
                yearly_investment: args.amount,
                years: args.years,
            }),
            Commands::Fd(args) => AppCommand::FixedDeposit(FixedDepositRequest {
                amount: args.amount,
                rate: args.rate,
                years: args.years,
                interest_type: args.interest_type.map(Into::into),
            }),
            Commands::Sip(args) => AppCommand::Sip(args.into()),
            Commands::Rd(args) => AppCommand::RecurringDeposit(args.into()),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let result = match cli.command {
        Some(Commands::Setup) => fincalc::cli::setup::setup(),
        Some(cmd) => fincalc::run_command(cmd.into(), cli.config_path.as_deref(), format),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
