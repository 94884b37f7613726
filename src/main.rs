use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use income_engine::api::{AppState, create_router};
use income_engine::calculation::IncomeTaxCalculator;
use income_engine::config::{ConfigLoader, ServiceConfig};
use income_engine::error::{EngineError, EngineResult};
use income_engine::models::{IncomeInput, IncomeSource};
use income_engine::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "income-engine",
    about = "Estimate UK take-home pay from an hourly wage or annual salary",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate a single breakdown and print it as JSON
    Calculate(CalculateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// YAML file with tax year constants (defaults to the built-in 2025-2026 year)
    #[arg(long)]
    tax_year_config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Annual salary
    #[arg(long, conflicts_with_all = ["hourly_rate", "hours_per_week"])]
    annual_salary: Option<Decimal>,
    /// Hourly wage
    #[arg(long, requires = "hours_per_week")]
    hourly_rate: Option<Decimal>,
    /// Contracted hours per week
    #[arg(long, requires = "hourly_rate")]
    hours_per_week: Option<Decimal>,
    /// Skip income tax and National Insurance
    #[arg(long)]
    no_tax: bool,
    /// YAML file with tax year constants
    #[arg(long)]
    tax_year_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> EngineResult<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args).await,
        Command::Calculate(args) => calculate(args),
    }
}

async fn serve(args: ServeArgs) -> EngineResult<()> {
    let mut config = ServiceConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.tax_year_config.is_some() {
        config.tax_year_config = args.tax_year_config;
    }

    telemetry::init(&config.log_level)?;

    let tax_year = ConfigLoader::load_or_built_in(config.tax_year_config.as_ref())?.into_config();
    let state = AppState::new(tax_year).with_allowed_origins(config.allowed_origins.clone());
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, origins = ?config.allowed_origins, "Income engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn calculate(args: CalculateArgs) -> EngineResult<()> {
    let source = match (args.annual_salary, args.hourly_rate, args.hours_per_week) {
        (Some(annual_salary), _, _) => IncomeSource::Annual { annual_salary },
        (None, Some(hourly_rate), Some(hours_per_week)) => IncomeSource::Hourly {
            hourly_rate,
            hours_per_week,
        },
        _ => {
            return Err(EngineError::MissingRequiredField {
                field: "annual_salary or hourly_rate and hours_per_week".to_string(),
                income_type: "annual or hourly".to_string(),
            });
        }
    };

    let input = IncomeInput {
        source,
        tax_enabled: !args.no_tax,
    };
    input.validate()?;

    let tax_year = ConfigLoader::load_or_built_in(args.tax_year_config.as_ref())?.into_config();
    let breakdown = IncomeTaxCalculator::new(tax_year).calculate(&input);

    let json = serde_json::to_string_pretty(&breakdown)?;
    println!("{json}");
    Ok(())
}
