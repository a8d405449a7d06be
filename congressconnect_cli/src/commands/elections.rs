//! The `elections` subcommand: populate term and next-election fields.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use congressconnect_lib::elections::ElectionSchedule;
use congressconnect_lib::{Db, SearchFilter};

#[derive(Args)]
pub struct ElectionsArgs {
    /// SQLite database path
    #[arg(long, default_value = "congress.db")]
    pub db: PathBuf,

    /// Limit the pass to one state
    #[arg(long, default_value = "FL")]
    pub state: String,
}

pub fn run(args: &ElectionsArgs) -> Result<()> {
    let db = Db::open(&args.db)?;
    db.init()?;

    let officials = db.search(&SearchFilter {
        state: Some(args.state.to_uppercase()),
        ..Default::default()
    })?;

    let schedule = ElectionSchedule::default();
    let mut updated = 0;
    let mut skipped = Vec::new();

    for official in &officials {
        match schedule.info_for(official) {
            Some(info) => {
                updated += db.apply_election_info(&official.external_id, info)?;
                println!(
                    "[{}] {} ({}): term ends {}, next general {}",
                    official.office,
                    official.full_name(),
                    official.district,
                    info.term_end,
                    info.next_general
                );
            }
            None => skipped.push(official.full_name()),
        }
    }

    println!("\nElection info applied to {} officials", updated);
    if !skipped.is_empty() {
        println!("No calendar entry for: {}", skipped.join(", "));
    }

    Ok(())
}
