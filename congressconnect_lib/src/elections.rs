//! Election-calendar batch pass.
//!
//! Populates term-end and next-election fields on roster entries. House seats
//! share one cycle-wide calendar; Senate seats are staggered, so they are
//! covered by an explicit per-seat override list.

use crate::models::{Office, Official};

/// Term and next-election dates for one official. Free-text, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionInfo {
    pub term_end: String,
    pub next_primary: String,
    pub next_general: String,
}

/// The calendar applied by the election pass: one entry for every House seat
/// plus per-last-name Senate overrides.
#[derive(Debug, Clone)]
pub struct ElectionSchedule {
    pub house: ElectionInfo,
    pub senate_overrides: Vec<(String, ElectionInfo)>,
}

impl Default for ElectionSchedule {
    /// The 2026 cycle: every House seat is up, one Senate seat is a special
    /// election and the other is not up until 2030.
    fn default() -> Self {
        let primary_2026 = "August 18, 2026";
        let general_2026 = "November 3, 2026";

        Self {
            house: ElectionInfo {
                term_end: "January 3, 2027".to_string(),
                next_primary: primary_2026.to_string(),
                next_general: general_2026.to_string(),
            },
            senate_overrides: vec![
                (
                    "Scott".to_string(),
                    ElectionInfo {
                        term_end: "January 3, 2031".to_string(),
                        next_primary: "August 2030".to_string(),
                        next_general: "November 2030".to_string(),
                    },
                ),
                (
                    "Rubio".to_string(),
                    ElectionInfo {
                        term_end: "January 3, 2027 (Special Election)".to_string(),
                        next_primary: primary_2026.to_string(),
                        next_general: general_2026.to_string(),
                    },
                ),
            ],
        }
    }
}

impl ElectionSchedule {
    /// The calendar entry applying to an official, if any. Senate seats with
    /// no override are skipped rather than guessed.
    pub fn info_for(&self, official: &Official) -> Option<&ElectionInfo> {
        match official.office {
            Office::House => Some(&self.house),
            Office::Senate => self
                .senate_overrides
                .iter()
                .find(|(last, _)| last.eq_ignore_ascii_case(&official.last_name))
                .map(|(_, info)| info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{derive_external_id, STATEWIDE};

    fn official(first: &str, last: &str, office: Office, district: &str) -> Official {
        Official {
            external_id: derive_external_id(last, first),
            first_name: first.to_string(),
            middle_name: None,
            last_name: last.to_string(),
            office,
            state: "FL".to_string(),
            district: district.to_string(),
            party: "Republican".to_string(),
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
            aipac_funded: "No".to_string(),
            war_industry_funded: "No".to_string(),
            term_end: None,
            next_primary: None,
            next_general: None,
            last_updated: None,
            verified: false,
        }
    }

    #[test]
    fn every_house_seat_gets_the_cycle_calendar() {
        let schedule = ElectionSchedule::default();
        let rep = official("Kathy", "Castor", Office::House, "FL-14");
        let info = schedule.info_for(&rep).unwrap();
        assert_eq!(info.next_general, "November 3, 2026");
        assert_eq!(info.term_end, "January 3, 2027");
    }

    #[test]
    fn senate_seats_use_overrides() {
        let schedule = ElectionSchedule::default();

        let scott = official("Rick", "Scott", Office::Senate, STATEWIDE);
        let info = schedule.info_for(&scott).unwrap();
        assert_eq!(info.next_general, "November 2030");

        let rubio = official("Marco", "Rubio", Office::Senate, STATEWIDE);
        let info = schedule.info_for(&rubio).unwrap();
        assert!(info.term_end.contains("Special Election"));
    }

    #[test]
    fn unlisted_senate_seat_is_skipped() {
        let schedule = ElectionSchedule::default();
        let unknown = official("Jane", "Doe", Office::Senate, STATEWIDE);
        assert!(schedule.info_for(&unknown).is_none());
    }
}
