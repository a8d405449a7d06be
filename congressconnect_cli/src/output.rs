use anyhow::Result;
use congressconnect_lib::models::Official;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct OfficialRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Party")]
    #[serde(rename = "Party")]
    party: String,
    #[tabled(rename = "Office")]
    #[serde(rename = "Office")]
    office: String,
    #[tabled(rename = "District")]
    #[serde(rename = "District")]
    district: String,
    #[tabled(rename = "AIPAC Funded")]
    #[serde(rename = "AIPAC Funded")]
    aipac: String,
    #[tabled(rename = "War Industry")]
    #[serde(rename = "War Industry")]
    war_industry: String,
    #[tabled(rename = "Phone")]
    #[serde(rename = "Phone")]
    phone: String,
}

fn build_official_rows(officials: &[Official]) -> Vec<OfficialRow> {
    officials
        .iter()
        .map(|o| OfficialRow {
            name: o.full_name(),
            party: o.party.clone(),
            office: o.office.to_string(),
            district: o.district.clone(),
            aipac: o.aipac_funded.clone(),
            war_industry: o.war_industry_funded.clone(),
            phone: o.dc_phone.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn print_officials_table(officials: &[Official]) {
    let rows = build_official_rows(officials);
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Full detail card for a single official: role, funding flags, elections,
/// and every contact channel on file.
pub fn print_official_card(official: &Official) {
    println!("{}", official.full_name());
    println!(
        "  {} | {} | {}",
        official.party, official.office, official.district
    );
    if let Some(ref region) = official.region {
        println!("  Region: {}", region);
    }

    println!("  AIPAC Funded: {}", official.aipac_funded);
    println!("  War Industry Funded: {}", official.war_industry_funded);

    if let Some(ref term_end) = official.term_end {
        println!("  Current term ends: {}", term_end);
    }
    if let Some(ref general) = official.next_general {
        println!("  Next general election: {}", general);
    }

    if let Some(ref phone) = official.dc_phone {
        println!("  Phone: {}", phone);
    }
    if let Some(ref website) = official.website {
        println!("  Website: {}", website);
    }
    if let Some(ref form) = official.contact_form {
        println!("  Contact form: {}", form);
    }
    match official.email.as_deref() {
        Some(email) if email != "Use web form" => println!("  Email: {}", email),
        _ => {}
    }
    if let (Some(address), Some(zip)) = (&official.dc_office_address, &official.dc_zip) {
        println!("  DC Office: {}, Washington, DC {}", address, zip);
    }

    let socials: Vec<String> = [
        ("Facebook", &official.facebook),
        ("Twitter/X", &official.twitter),
        ("Instagram", &official.instagram),
        ("TikTok", &official.tiktok),
    ]
    .iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
    .collect();
    if !socials.is_empty() {
        println!("  Social: {}", socials.join(" | "));
    }
}
