//! The `stats` subcommand: roster statistics.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use congressconnect_lib::Db;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct StatsArgs {
    /// SQLite database path
    #[arg(long, default_value = "congress.db")]
    pub db: PathBuf,
}

#[derive(Serialize)]
struct StatsOut {
    total: i64,
    by_party: Vec<(String, i64)>,
    by_state: Vec<(String, i64)>,
    aipac_funded: i64,
    war_industry_funded: i64,
}

pub fn run(args: &StatsArgs, format: &OutputFormat) -> Result<()> {
    let db = Db::open(&args.db)?;
    db.init()?;
    let stats = db.stats()?;

    match format {
        OutputFormat::Json => print_json(&StatsOut {
            total: stats.total,
            by_party: stats.by_party,
            by_state: stats.by_state,
            aipac_funded: stats.aipac_funded_count,
            war_industry_funded: stats.war_industry_funded_count,
        })?,
        OutputFormat::Table => {
            println!("Total officials: {}", stats.total);
            println!("By party:");
            for (party, count) in &stats.by_party {
                println!("  {}: {}", party, count);
            }
            println!("By state:");
            for (state, count) in &stats.by_state {
                println!("  {}: {}", state, count);
            }
            println!("AIPAC funded: {}", stats.aipac_funded_count);
            println!("War industry funded: {}", stats.war_industry_funded_count);
        }
    }

    Ok(())
}
