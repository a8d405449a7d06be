//! The `district` subcommand: manual district selection.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use congressconnect_lib::{validation, Db, LookupService};

use crate::output::{print_json, print_official_card, OutputFormat};

#[derive(Args)]
pub struct DistrictArgs {
    /// District code, e.g. FL-27
    pub district: String,

    /// SQLite database path
    #[arg(long, default_value = "congress.db")]
    pub db: PathBuf,
}

pub fn run(args: &DistrictArgs, format: &OutputFormat) -> Result<()> {
    let district = validation::validate_district(&args.district)?;

    let db = Db::open(&args.db)?;
    db.init()?;
    let service = LookupService::new(&db);

    match service.lookup_district(&district)? {
        Some(rep) => match format {
            OutputFormat::Json => print_json(&rep)?,
            OutputFormat::Table => print_official_card(&rep),
        },
        None => eprintln!("No representative on file for {}", district),
    }

    Ok(())
}
