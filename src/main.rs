use anyhow::Result;
use arta::core::log::init_logging;
use arta::core::money;
use arta::{AppCommand, InputOverrides};
use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Financial figures for this run; anything omitted falls back to the
/// saved profile.
#[derive(Args)]
struct InputArgs {
    /// Monthly income in rupiah; grouped digits like 5.000.000 are accepted
    #[arg(short, long)]
    income: Option<String>,

    /// Monthly expenses in rupiah
    #[arg(short, long)]
    expenses: Option<String>,

    /// Cash savings currently held
    #[arg(short, long)]
    savings: Option<String>,

    /// Gold currently held, in grams
    #[arg(short, long)]
    gold_grams: Option<f64>,

    /// Percent of the monthly surplus directed to gold
    #[arg(short = 'r', long, value_parser = clap::value_parser!(u8).range(0..=100))]
    gold_ratio: Option<u8>,
}

impl InputArgs {
    fn to_overrides(&self) -> Result<InputOverrides> {
        Ok(InputOverrides {
            monthly_income: self.income.as_deref().map(money::parse_amount).transpose()?,
            monthly_expenses: self
                .expenses
                .as_deref()
                .map(money::parse_amount)
                .transpose()?,
            current_savings: self
                .savings
                .as_deref()
                .map(money::parse_amount)
                .transpose()?,
            gold_grams: self.gold_grams,
            gold_ratio: self.gold_ratio,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the monthly cash/gold allocation dashboard
    Dashboard(InputArgs),
    /// Evaluate the three savings strategy plans
    Strategy(InputArgs),
    /// Project wealth growth over the 1/5/10 year horizons
    Projection(InputArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.as_deref();
    let result = match &cli.command {
        Some(Commands::Setup) => arta::cli::setup::setup(),
        Some(Commands::Dashboard(args)) => args
            .to_overrides()
            .and_then(|o| arta::run_command(AppCommand::Dashboard, config_path, o)),
        Some(Commands::Strategy(args)) => args
            .to_overrides()
            .and_then(|o| arta::run_command(AppCommand::Strategy, config_path, o)),
        Some(Commands::Projection(args)) => args
            .to_overrides()
            .and_then(|o| arta::run_command(AppCommand::Projection, config_path, o)),
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
