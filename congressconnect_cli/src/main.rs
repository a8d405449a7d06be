mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "congressconnect")]
#[command(about = "Find and contact federal representatives, with campaign funding transparency")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up representatives for a ZIP code
    Lookup(commands::lookup::LookupArgs),
    /// Look up the House representative for a district code
    District(commands::district::DistrictArgs),
    /// Browse the roster with filters
    Browse(commands::browse::BrowseArgs),
    /// Create the schema and import the officials CSV
    Import(commands::import::ImportArgs),
    /// Reconcile an external funding file against the roster
    UpdateFunding(commands::update_funding::UpdateFundingArgs),
    /// Apply the election calendar to the roster
    Elections(commands::elections::ElectionsArgs),
    /// Show roster statistics
    Stats(commands::stats::StatsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("congressconnect_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::Lookup(args) => commands::lookup::run(args, &format).await?,
        Commands::District(args) => commands::district::run(args, &format)?,
        Commands::Browse(args) => commands::browse::run(args, &format)?,
        Commands::Import(args) => commands::import::run(args)?,
        Commands::UpdateFunding(args) => commands::update_funding::run(args)?,
        Commands::Elections(args) => commands::elections::run(args)?,
        Commands::Stats(args) => commands::stats::run(args, &format)?,
    }

    Ok(())
}
