//! The `browse` subcommand: filtered roster listing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use congressconnect_lib::{validation, Db, SearchFilter};

use crate::output::{print_json, print_officials_table, OutputFormat};

#[derive(Args)]
pub struct BrowseArgs {
    /// SQLite database path
    #[arg(long, default_value = "congress.db")]
    pub db: PathBuf,

    /// Filter by office: senate (s) or house (h)
    #[arg(long)]
    pub office: Option<String>,

    /// Filter by party: democrat (d), republican (r), independent (i)
    #[arg(long)]
    pub party: Option<String>,

    /// Filter by state code (e.g. FL)
    #[arg(long)]
    pub state: Option<String>,

    /// Filter by AIPAC funding: yes or no
    #[arg(long)]
    pub aipac: Option<String>,

    /// Filter by war-industry funding: yes or no
    #[arg(long)]
    pub war_industry: Option<String>,
}

pub fn run(args: &BrowseArgs, format: &OutputFormat) -> Result<()> {
    let mut filter = SearchFilter::default();

    if let Some(ref office) = args.office {
        filter.office = Some(validation::validate_office(office)?);
    }
    if let Some(ref party) = args.party {
        filter.party = Some(validation::validate_party(party)?);
    }
    if let Some(ref state) = args.state {
        filter.state = Some(state.trim().to_uppercase());
    }
    if let Some(ref aipac) = args.aipac {
        filter.aipac = Some(validation::validate_funding_filter(aipac)?);
    }
    if let Some(ref war) = args.war_industry {
        filter.war_industry = Some(validation::validate_funding_filter(war)?);
    }

    let db = Db::open(&args.db)?;
    db.init()?;
    let officials = db.search(&filter)?;

    eprintln!("Showing {} representatives", officials.len());
    match format {
        OutputFormat::Table => print_officials_table(&officials),
        OutputFormat::Json => print_json(&officials)?,
    }

    Ok(())
}
