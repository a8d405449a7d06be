//! ZIP lookup: district resolution composed with the roster store.
//!
//! A pure read path. When a provider client is configured it is tried first;
//! any provider failure or empty answer degrades to the local range table and
//! is never surfaced to the caller.

use serde::Serialize;

use crate::db::{Db, DbError};
use crate::models::Official;
use crate::resolver::{self, DistrictInfo, Source};

/// Result of a ZIP lookup, shaped for direct presentation.
#[derive(Debug, Clone, Serialize)]
pub struct ZipLookup {
    pub success: bool,
    pub district: Option<String>,
    pub house_rep: Option<Official>,
    pub senators: Vec<Official>,
    pub message: String,
}

impl ZipLookup {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            district: None,
            house_rep: None,
            senators: Vec::new(),
            message: message.into(),
        }
    }
}

/// Answers "who represents this ZIP code" against an open roster store,
/// with an optional external district provider.
pub struct LookupService<'a> {
    db: &'a Db,
    provider: Option<civicinfo_api::Client>,
}

impl<'a> LookupService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db, provider: None }
    }

    pub fn with_provider(db: &'a Db, provider: civicinfo_api::Client) -> Self {
        Self {
            db,
            provider: Some(provider),
        }
    }

    /// Resolves a ZIP to a district, preferring the provider when configured.
    /// Provider failures fall back to the local table.
    async fn resolve_district(&self, zip: &str) -> Option<DistrictInfo> {
        if let Some(ref provider) = self.provider {
            match provider.district_for_zip(zip).await {
                Ok(Some(division)) => {
                    return Some(DistrictInfo {
                        district: division.district,
                        state: division.state,
                        source: Source::Provider,
                    });
                }
                Ok(None) => {
                    tracing::debug!("provider had no division for {}, using local table", zip);
                }
                Err(e) => {
                    tracing::warn!("provider lookup failed ({}), using local table", e);
                }
            }
        }

        // Already validated, so only a table miss can produce None here.
        resolver::resolve(zip).ok().flatten()
    }

    /// Looks up the representatives for a ZIP code.
    ///
    /// Validation failures and unmapped ZIPs come back as unsuccessful
    /// results with a user-facing message, not errors; only store access can
    /// fail hard.
    pub async fn lookup_zip(&self, zip: &str) -> Result<ZipLookup, DbError> {
        if resolver::validate_zip(zip).is_err() {
            return Ok(ZipLookup::failure("Please enter a valid 5-digit ZIP code"));
        }

        let Some(info) = self.resolve_district(zip).await else {
            return Ok(ZipLookup::failure(
                "Could not determine district. Please select manually.",
            ));
        };

        let house_rep = self.db.house_rep_by_district(&info.district)?;
        let senators = self.db.senators_by_state(&info.state)?;

        if house_rep.is_none() && senators.is_empty() {
            return Ok(ZipLookup::failure(format!(
                "No representatives found for {}",
                info.district
            )));
        }

        Ok(ZipLookup {
            success: true,
            message: format!("Found representatives for {}", info.district),
            district: Some(info.district),
            house_rep,
            senators,
        })
    }

    /// Manual district selection path.
    pub fn lookup_district(&self, district: &str) -> Result<Option<Official>, DbError> {
        self.db.house_rep_by_district(district)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{derive_external_id, Office, STATEWIDE};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

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

    fn seeded_db() -> Db {
        let mut db = Db::open_in_memory().unwrap();
        db.init().unwrap();
        db.upsert_officials(&[
            official("Rick", "Scott", Office::Senate, STATEWIDE),
            official("Ashley", "Moody", Office::Senate, STATEWIDE),
            official("Maria", "Salazar", Office::House, "FL-27"),
        ])
        .unwrap();
        db
    }

    #[tokio::test]
    async fn miami_zip_finds_house_rep_and_both_senators() {
        let db = seeded_db();
        let service = LookupService::new(&db);

        let result = service.lookup_zip("33139").await.unwrap();
        assert!(result.success);
        assert_eq!(result.district.as_deref(), Some("FL-27"));
        assert_eq!(result.house_rep.unwrap().last_name, "Salazar");
        assert_eq!(result.senators.len(), 2);
        assert_eq!(result.message, "Found representatives for FL-27");
    }

    #[tokio::test]
    async fn invalid_zip_fails_without_touching_the_store() {
        let db = Db::open_in_memory().unwrap();
        // No init: a store read would error, proving validation short-circuits.
        let service = LookupService::new(&db);

        let result = service.lookup_zip("123").await.unwrap();
        assert!(!result.success);
        assert_eq!(result.message, "Please enter a valid 5-digit ZIP code");
    }

    #[tokio::test]
    async fn unmapped_zip_asks_for_manual_selection() {
        let db = seeded_db();
        let service = LookupService::new(&db);

        let result = service.lookup_zip("00000").await.unwrap();
        assert!(!result.success);
        assert_eq!(
            result.message,
            "Could not determine district. Please select manually."
        );
    }

    #[tokio::test]
    async fn resolved_district_with_empty_roster_reports_no_reps() {
        let db = Db::open_in_memory().unwrap();
        db.init().unwrap();
        let service = LookupService::new(&db);

        let result = service.lookup_zip("33139").await.unwrap();
        assert!(!result.success);
        assert_eq!(result.message, "No representatives found for FL-27");
    }

    #[tokio::test]
    async fn district_without_officeholder_still_returns_senators() {
        let mut db = Db::open_in_memory().unwrap();
        db.init().unwrap();
        db.upsert_officials(&[
            official("Rick", "Scott", Office::Senate, STATEWIDE),
            official("Ashley", "Moody", Office::Senate, STATEWIDE),
        ])
        .unwrap();
        let service = LookupService::new(&db);

        let result = service.lookup_zip("33139").await.unwrap();
        assert!(result.success);
        assert!(result.house_rep.is_none());
        assert_eq!(result.senators.len(), 2);
    }

    #[tokio::test]
    async fn provider_answer_wins_over_local_table() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/representatives"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"offices": [{"name": "U.S. House", "divisionId": "ocd-division/country:us/state:fl/cd:27"}]}"#,
            ))
            .mount(&mock_server)
            .await;

        let db = seeded_db();
        let provider = civicinfo_api::Client::with_base_url(&mock_server.uri(), "test-key");
        let service = LookupService::with_provider(&db, provider);

        // 00000 is unmapped locally; only the provider can resolve it.
        let result = service.lookup_zip("00000").await.unwrap();
        assert!(result.success);
        assert_eq!(result.district.as_deref(), Some("FL-27"));
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_local_table() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/representatives"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let db = seeded_db();
        let provider = civicinfo_api::Client::with_base_url(&mock_server.uri(), "test-key");
        let service = LookupService::with_provider(&db, provider);

        let result = service.lookup_zip("33139").await.unwrap();
        assert!(result.success, "provider failure must not reach the caller");
        assert_eq!(result.district.as_deref(), Some("FL-27"));
    }
}
