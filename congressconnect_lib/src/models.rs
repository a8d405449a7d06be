//! Core record types for the roster.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel funding-flag value for an official with no disclosed funding.
pub const NO_FUNDING: &str = "No";

/// Sentinel district value for Senate officials.
pub const STATEWIDE: &str = "Statewide";

/// Which chamber an official sits in.
///
/// Stored in the database as the display string, so `Senate` sorts after
/// `House` and `ORDER BY office DESC` yields senators first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Office {
    Senate,
    House,
}

impl Office {
    pub fn as_str(&self) -> &'static str {
        match self {
            Office::Senate => "U.S. Senate",
            Office::House => "U.S. House",
        }
    }

    /// Parses the stored display string back into the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "U.S. Senate" => Some(Office::Senate),
            "U.S. House" => Some(Office::House),
            _ => None,
        }
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One elected official in the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Official {
    /// Synthesized stable identifier: uppercased last name + first initial.
    pub external_id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub office: Office,
    pub state: String,
    /// `"FL-NN"` for House seats, [`STATEWIDE`] for Senate seats.
    pub district: String,
    pub party: String,
    pub region: Option<String>,
    pub dc_office_address: Option<String>,
    pub dc_zip: Option<String>,
    pub dc_phone: Option<String>,
    pub website: Option<String>,
    pub contact_form: Option<String>,
    pub email: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    /// Either [`NO_FUNDING`] or a grouped currency amount, never empty.
    pub aipac_funded: String,
    /// Either [`NO_FUNDING`] or a grouped currency amount, never empty.
    pub war_industry_funded: String,
    pub term_end: Option<String>,
    pub next_primary: Option<String>,
    pub next_general: Option<String>,
    pub last_updated: Option<String>,
    pub verified: bool,
}

impl Official {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_senator(&self) -> bool {
        self.office == Office::Senate
    }
}

/// Derives the stable external id from name fields: uppercased last name
/// followed by the uppercased first initial. Deterministic, so re-importing
/// the same roster regenerates the same ids.
pub fn derive_external_id(last_name: &str, first_name: &str) -> String {
    let initial = first_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    format!("{}{}", last_name.trim().to_uppercase(), initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn office_round_trips_through_display() {
        assert_eq!(Office::parse(Office::Senate.as_str()), Some(Office::Senate));
        assert_eq!(Office::parse(Office::House.as_str()), Some(Office::House));
        assert_eq!(Office::parse("House of Lords"), None);
    }

    #[test]
    fn external_id_is_deterministic() {
        assert_eq!(derive_external_id("Luna", "Anna"), "LUNAA");
        assert_eq!(derive_external_id("luna", "anna"), "LUNAA");
        assert_eq!(derive_external_id(" Castor ", "Kathy"), "CASTORK");
    }

    #[test]
    fn external_id_handles_empty_first_name() {
        assert_eq!(derive_external_id("Scott", ""), "SCOTT");
    }
}
