//! Input validation for filter values coming from the CLI surface.

use crate::db::FundingFilter;
use crate::models::{Office, STATEWIDE};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// Validate a party filter: case-insensitive, supports shorthand d/r/i.
pub fn validate_party(input: &str) -> Result<String, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "democrat" | "d" => Ok("Democrat".to_string()),
        "republican" | "r" => Ok("Republican".to_string()),
        "independent" | "i" => Ok("Independent".to_string()),
        _ => Err(ValidationError::Invalid(format!(
            "unknown party '{}'. Valid values: democrat (d), republican (r), independent (i)",
            input
        ))),
    }
}

/// Validate an office filter: senate or house, case-insensitive.
pub fn validate_office(input: &str) -> Result<Office, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "senate" | "s" | "u.s. senate" => Ok(Office::Senate),
        "house" | "h" | "u.s. house" => Ok(Office::House),
        _ => Err(ValidationError::Invalid(format!(
            "unknown office '{}'. Valid values: senate (s), house (h)",
            input
        ))),
    }
}

/// Validate a tri-state funding filter value: yes/no (or funded/unfunded).
pub fn validate_funding_filter(input: &str) -> Result<FundingFilter, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "funded" => Ok(FundingFilter::Funded),
        "no" | "unfunded" => Ok(FundingFilter::Unfunded),
        _ => Err(ValidationError::Invalid(format!(
            "unknown funding filter '{}'. Valid values: yes, no",
            input
        ))),
    }
}

/// Validate a district code: `ST-NN` (uppercased) or the Statewide sentinel.
pub fn validate_district(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(STATEWIDE) {
        return Ok(STATEWIDE.to_string());
    }

    let upper = trimmed.to_uppercase();
    let bytes = upper.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == b'-'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();

    if well_formed {
        Ok(upper)
    } else {
        Err(ValidationError::Invalid(format!(
            "district must look like FL-27, got '{}'",
            input
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_shorthands() {
        assert_eq!(validate_party("d").unwrap(), "Democrat");
        assert_eq!(validate_party("Republican").unwrap(), "Republican");
        assert_eq!(validate_party("INDEPENDENT").unwrap(), "Independent");
        assert!(validate_party("green").is_err());
    }

    #[test]
    fn office_values() {
        assert_eq!(validate_office("senate").unwrap(), Office::Senate);
        assert_eq!(validate_office("H").unwrap(), Office::House);
        assert!(validate_office("governor").is_err());
    }

    #[test]
    fn funding_filter_values() {
        assert_eq!(validate_funding_filter("yes").unwrap(), FundingFilter::Funded);
        assert_eq!(validate_funding_filter("No").unwrap(), FundingFilter::Unfunded);
        assert!(validate_funding_filter("maybe").is_err());
    }

    #[test]
    fn district_codes() {
        assert_eq!(validate_district("fl-27").unwrap(), "FL-27");
        assert_eq!(validate_district("Statewide").unwrap(), "Statewide");
        assert!(validate_district("FL27").is_err());
        assert!(validate_district("FL-7").is_err());
    }
}
