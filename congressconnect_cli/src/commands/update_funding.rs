//! The `update-funding` subcommand: reconcile an external funding file
//! against the roster and apply the matched flag updates.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use congressconnect_lib::reconcile::{self, FundingUpdate};
use congressconnect_lib::{Db, SearchFilter};

#[derive(Args)]
pub struct UpdateFundingArgs {
    /// Funding-source CSV file (FEC-derived)
    #[arg(long)]
    pub csv: PathBuf,

    /// SQLite database path
    #[arg(long, default_value = "congress.db")]
    pub db: PathBuf,

    /// Target state; records for other states are skipped
    #[arg(long, default_value = "FL")]
    pub state: String,

    /// Report matches without writing to the database
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: &UpdateFundingArgs) -> Result<()> {
    let file = File::open(&args.csv)
        .with_context(|| format!("failed to open {}", args.csv.display()))?;
    let records = reconcile::read_funding_csv(file)?;

    let state = args.state.to_uppercase();
    let db = Db::open(&args.db)?;
    db.init()?;

    let roster = db.search(&SearchFilter {
        state: Some(state.clone()),
        ..Default::default()
    })?;
    if roster.is_empty() {
        bail!("No officials on file for {}; run import first", state);
    }

    println!(
        "Reconciling {} funding records against {} officials ({})",
        records.len(),
        roster.len(),
        state
    );

    let report = reconcile::reconcile_batch(&records, &roster, &state);

    for update in &report.matched {
        println!(
            "[OK] {} {} ({}) -- AIPAC: {}, War Industry: {}",
            update.first_name,
            update.last_name,
            update.district,
            update.aipac_funded,
            update.war_industry_funded
        );
    }
    for (cand_name, reason) in &report.unmatched {
        println!("[X] No match: {} ({})", cand_name, reason.as_str());
    }

    println!("\nMatching summary:");
    println!("  Matched:   {}", report.matched.len());
    println!("  Unmatched: {}", report.unmatched.len());
    if report.skipped_other_state > 0 {
        println!("  Skipped (other state): {}", report.skipped_other_state);
    }

    if report.matched.is_empty() {
        println!("\nNo matches found. Exiting without changes.");
        return Ok(());
    }

    if args.dry_run {
        println!("\nDry run: no database changes applied.");
    } else {
        let mut applied = 0;
        for update in &report.matched {
            applied += db.apply_funding_update(update)?;
        }
        println!("\nDatabase updated: {} officials", applied);
    }

    print_top_funded(&report.matched);

    Ok(())
}

/// Reporting only: the flag updates above are the contract, this is color.
fn print_top_funded(updates: &[FundingUpdate]) {
    let mut by_aipac: Vec<&FundingUpdate> =
        updates.iter().filter(|u| u.aipac_amount > 0.0).collect();
    by_aipac.sort_by(|a, b| b.aipac_amount.total_cmp(&a.aipac_amount));

    if !by_aipac.is_empty() {
        println!("\nTop AIPAC funded:");
        for update in by_aipac.iter().take(5) {
            println!(
                "  {} {} ({}): {}",
                update.first_name, update.last_name, update.district, update.aipac_funded
            );
        }
    }

    let mut by_war: Vec<&FundingUpdate> = updates
        .iter()
        .filter(|u| u.war_industry_amount > 0.0)
        .collect();
    by_war.sort_by(|a, b| b.war_industry_amount.total_cmp(&a.war_industry_amount));

    if !by_war.is_empty() {
        println!("\nTop war-industry funded:");
        for update in by_war.iter().take(5) {
            println!(
                "  {} {} ({}): {}",
                update.first_name, update.last_name, update.district, update.war_industry_funded
            );
        }
    }
}
