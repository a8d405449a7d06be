//! The `import` subcommand: bulk-load the officials CSV into the store.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use congressconnect_lib::{import, Db};

#[derive(Args)]
pub struct ImportArgs {
    /// Officials CSV file
    #[arg(long)]
    pub csv: PathBuf,

    /// SQLite database path
    #[arg(long, default_value = "congress.db")]
    pub db: PathBuf,

    /// Default state code for rows without a district prefix
    #[arg(long, default_value = "FL")]
    pub state: String,
}

pub fn run(args: &ImportArgs) -> Result<()> {
    let file = File::open(&args.csv)
        .with_context(|| format!("failed to open {}", args.csv.display()))?;
    let report = import::read_roster_csv(file, &args.state.to_uppercase())?;

    let mut db = Db::open(&args.db)?;
    db.init()?;
    db.upsert_officials(&report.officials)?;

    println!(
        "Imported {} officials into {}",
        report.officials.len(),
        args.db.display()
    );
    if !report.skipped.is_empty() {
        eprintln!("Skipped {} rows:", report.skipped.len());
        for (row, reason) in &report.skipped {
            eprintln!("  row {}: {}", row, reason);
        }
    }

    Ok(())
}
