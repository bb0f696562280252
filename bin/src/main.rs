//! macroetl CLI - Brazilian macroeconomic indicators ETL.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "macroetl")]
#[command(about = "Fetches Brazilian macroeconomic indicators and stores them as Parquet", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the ETL for one source or all configured sources
    Run {
        /// Run every source listed in ALL_APIS
        #[arg(long, conflicts_with = "api")]
        all: bool,

        /// Source to run (selic, dolar, focus, ibge, tesouro). Defaults to selic.
        #[arg(short, long)]
        api: Option<String>,

        /// Reference date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// Raw event JSON, e.g. '{"run_all": true, "date": "2025-11-14"}'
        #[arg(long, conflicts_with_all = ["all", "api", "date"])]
        event: Option<String>,
    },

    /// Show the business day a reference date resolves to
    BusinessDay {
        /// Reference date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// Number of business days to step back
        #[arg(short, long, default_value = "1")]
        offset: u32,
    },

    /// List supported sources
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Run {
            all,
            api,
            date,
            event,
        } => commands::run::run(all, api, date, event.as_deref()).await,
        Commands::BusinessDay { date, offset } => {
            commands::business_day::business_day(date.as_deref(), offset).await
        }
        Commands::Sources => commands::sources::list_sources(),
    }
}
