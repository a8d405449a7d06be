//! Response payload types for the representatives endpoint.

use serde::Deserialize;

/// Top-level representatives response. Only the offices list is needed to
/// recover the congressional district.
#[derive(Deserialize, Debug, Clone)]
pub struct RepresentativesResponse {
    #[serde(default)]
    pub offices: Vec<Office>,
}

/// An office entry: a role name plus the OCD division it covers.
#[derive(Deserialize, Debug, Clone)]
pub struct Office {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "divisionId", default)]
    pub division_id: String,
}

/// A congressional district recovered from an OCD division identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    /// Two-letter state code, uppercased (e.g. `FL`).
    pub state: String,
    /// District code in `ST-NN` form with a zero-padded district number.
    pub district: String,
}

impl RepresentativesResponse {
    /// Extracts the congressional district from the U.S. House office, if
    /// present. Returns `None` on any structural mismatch rather than failing;
    /// callers treat a parse miss the same as an empty response.
    pub fn house_division(&self) -> Option<Division> {
        self.offices
            .iter()
            .find(|office| office.name.contains("U.S. House"))
            .and_then(|office| parse_division_id(&office.division_id))
    }
}

/// Parses an OCD division id such as
/// `ocd-division/country:us/state:fl/cd:27` into a [`Division`].
///
/// The state comes from the `state:` segment and the district number from the
/// `cd:` segment, zero-padded to two digits. Anything that does not carry both
/// segments in that shape yields `None`.
pub fn parse_division_id(division_id: &str) -> Option<Division> {
    let mut state: Option<&str> = None;
    let mut district: Option<&str> = None;

    for segment in division_id.split('/') {
        if let Some(value) = segment.strip_prefix("state:") {
            state = Some(value);
        } else if let Some(value) = segment.strip_prefix("cd:") {
            district = Some(value);
        }
    }

    let state = state?.trim();
    let district = district?.trim();
    if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let number: u32 = district.parse().ok()?;

    let state = state.to_uppercase();
    Some(Division {
        district: format!("{}-{:02}", state, number),
        state,
    })
}
