//! The `lookup` subcommand: representatives for a ZIP code.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use congressconnect_lib::{civicinfo_api, Db, LookupService};

use crate::output::{print_json, print_official_card, OutputFormat};

#[derive(Args)]
pub struct LookupArgs {
    /// 5-digit ZIP code
    pub zip: String,

    /// SQLite database path
    #[arg(long, default_value = "congress.db")]
    pub db: PathBuf,
}

pub async fn run(args: &LookupArgs, format: &OutputFormat) -> Result<()> {
    let db = Db::open(&args.db)?;
    db.init()?;

    // With no key configured the local range table is the only resolver.
    let service = match std::env::var("CIVIC_API_KEY") {
        Ok(key) if !key.is_empty() => {
            LookupService::with_provider(&db, civicinfo_api::Client::new(key))
        }
        _ => LookupService::new(&db),
    };

    let result = service.lookup_zip(&args.zip).await?;

    if let OutputFormat::Json = format {
        return print_json(&result);
    }

    if !result.success {
        eprintln!("{}", result.message);
        return Ok(());
    }

    println!("{}", result.message);
    if let Some(ref rep) = result.house_rep {
        println!("\nYour U.S. House Representative:");
        print_official_card(rep);
    }
    if !result.senators.is_empty() {
        println!("\nYour U.S. Senators:");
        for senator in &result.senators {
            print_official_card(senator);
        }
    }

    Ok(())
}
