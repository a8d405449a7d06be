//! Bulk roster import from the officials CSV.
//!
//! Maps the source's named columns onto [`Official`], deriving the state from
//! the district prefix and the stable external id from name fields. Bad rows
//! are reported, never fatal.

use serde::Deserialize;

use crate::models::{derive_external_id, Office, Official, NO_FUNDING, STATEWIDE};

/// One row of the officials CSV, with the source's column headers.
#[derive(Debug, Clone, Deserialize)]
pub struct OfficialRow {
    #[serde(rename = "Office")]
    pub office: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Middle_Name")]
    pub middle_name: Option<String>,
    #[serde(rename = "District")]
    pub district: Option<String>,
    #[serde(rename = "Party")]
    pub party: String,
    #[serde(rename = "Geographic_Region")]
    pub region: Option<String>,
    #[serde(rename = "DC_Office_Address")]
    pub dc_office_address: Option<String>,
    #[serde(rename = "DC_Zip")]
    pub dc_zip: Option<String>,
    #[serde(rename = "DC_Phone")]
    pub dc_phone: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Contact_Form")]
    pub contact_form: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Facebook")]
    pub facebook: Option<String>,
    #[serde(rename = "Twitter_X")]
    pub twitter: Option<String>,
    #[serde(rename = "Instagram")]
    pub instagram: Option<String>,
    #[serde(rename = "TikTok")]
    pub tiktok: Option<String>,
    #[serde(rename = "AIPAC_Funded")]
    pub aipac_funded: Option<String>,
    #[serde(rename = "War_Industrial_Complex_Funded")]
    pub war_industry_funded: Option<String>,
}

/// Outcome of converting a CSV batch; bad rows are collected, not fatal.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub officials: Vec<Official>,
    /// (1-based data row number, problem description)
    pub skipped: Vec<(usize, String)>,
}

/// Derives the state code from a district value: the prefix before `-` for
/// House districts, the default state for the `Statewide` sentinel or a
/// missing district.
fn derive_state(district: Option<&str>, default_state: &str) -> (String, String) {
    match district {
        Some(d) if !d.trim().is_empty() && d != STATEWIDE => {
            let d = d.trim();
            let state = d.split('-').next().unwrap_or(default_state).to_string();
            (state, d.to_string())
        }
        _ => (default_state.to_string(), STATEWIDE.to_string()),
    }
}

fn funding_flag(raw: Option<String>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => NO_FUNDING.to_string(),
    }
}

impl OfficialRow {
    /// Converts a CSV row into an [`Official`], or explains why it cannot be.
    pub fn into_official(self, default_state: &str) -> Result<Official, String> {
        let office = Office::parse(self.office.trim())
            .ok_or_else(|| format!("unknown office '{}'", self.office))?;
        if self.last_name.trim().is_empty() {
            return Err("missing last name".to_string());
        }

        let (state, district) = derive_state(self.district.as_deref(), default_state);

        Ok(Official {
            external_id: derive_external_id(&self.last_name, &self.first_name),
            first_name: self.first_name.trim().to_string(),
            middle_name: self.middle_name.filter(|m| !m.trim().is_empty()),
            last_name: self.last_name.trim().to_string(),
            office,
            state,
            district,
            party: self.party.trim().to_string(),
            region: self.region.filter(|r| !r.trim().is_empty()),
            dc_office_address: self.dc_office_address,
            dc_zip: self.dc_zip,
            dc_phone: self.dc_phone,
            website: self.website,
            contact_form: self.contact_form,
            email: self.email,
            facebook: self.facebook,
            twitter: self.twitter,
            instagram: self.instagram,
            tiktok: self.tiktok,
            aipac_funded: funding_flag(self.aipac_funded),
            war_industry_funded: funding_flag(self.war_industry_funded),
            term_end: None,
            next_primary: None,
            next_general: None,
            last_updated: None,
            verified: false,
        })
    }
}

/// Reads the officials CSV and converts rows, collecting per-row failures.
pub fn read_roster_csv<R: std::io::Read>(
    reader: R,
    default_state: &str,
) -> Result<ImportReport, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut report = ImportReport::default();

    for (i, row) in csv_reader.deserialize::<OfficialRow>().enumerate() {
        let row_number = i + 1;
        match row {
            Ok(row) => match row.into_official(default_state) {
                Ok(official) => report.officials.push(official),
                Err(reason) => report.skipped.push((row_number, reason)),
            },
            Err(e) => report.skipped.push((row_number, e.to_string())),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(office: &str, last: &str, first: &str, district: Option<&str>) -> OfficialRow {
        OfficialRow {
            office: office.to_string(),
            last_name: last.to_string(),
            first_name: first.to_string(),
            middle_name: None,
            district: district.map(str::to_string),
            party: "Democrat".to_string(),
            region: None,
            dc_office_address: None,
            dc_zip: None,
            dc_phone: None,
            website: None,
            contact_form: None,
            email: None,
            facebook: None,
            twitter: None,
            instagram: None,
            tiktok: None,
            aipac_funded: None,
            war_industry_funded: None,
        }
    }

    #[test]
    fn house_state_comes_from_district_prefix() {
        let official = row("U.S. House", "Castor", "Kathy", Some("FL-14"))
            .into_official("FL")
            .unwrap();
        assert_eq!(official.state, "FL");
        assert_eq!(official.district, "FL-14");
        assert_eq!(official.office, Office::House);
    }

    #[test]
    fn senate_rows_get_the_statewide_sentinel() {
        for district in [Some("Statewide"), Some(""), None] {
            let official = row("U.S. Senate", "Scott", "Rick", district)
                .into_official("FL")
                .unwrap();
            assert_eq!(official.state, "FL");
            assert_eq!(official.district, "Statewide");
        }
    }

    #[test]
    fn blank_funding_defaults_to_no() {
        let official = row("U.S. House", "Castor", "Kathy", Some("FL-14"))
            .into_official("FL")
            .unwrap();
        assert_eq!(official.aipac_funded, "No");
        assert_eq!(official.war_industry_funded, "No");
    }

    #[test]
    fn unknown_office_is_rejected() {
        assert!(row("Governor", "DeSantis", "Ron", None)
            .into_official("FL")
            .is_err());
    }

    #[test]
    fn bad_rows_do_not_abort_the_batch() {
        let csv_data = "\
Office,Last_Name,First_Name,Middle_Name,District,Party,Geographic_Region,DC_Office_Address,DC_Zip,DC_Phone,Website,Contact_Form,Email,Facebook,Twitter_X,Instagram,TikTok,AIPAC_Funded,War_Industrial_Complex_Funded
U.S. House,Castor,Kathy,,FL-14,Democrat,Tampa,,,,,,,,,,,\"$100,000\",No
Governor,DeSantis,Ron,,,Republican,,,,,,,,,,,,No,No
U.S. Senate,Scott,Rick,,Statewide,Republican,,,,,,,,,,,,No,No
";
        let report = read_roster_csv(csv_data.as_bytes(), "FL").unwrap();
        assert_eq!(report.officials.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, 2);
        assert_eq!(report.officials[0].aipac_funded, "$100,000");
        assert_eq!(report.officials[0].external_id, "CASTORK");
    }
}
