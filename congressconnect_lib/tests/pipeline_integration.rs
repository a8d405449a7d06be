//! End-to-end pipeline: CSV import -> funding reconciliation -> ZIP lookup.

use congressconnect_lib::reconcile;
use congressconnect_lib::{import, Db, LookupService, SearchFilter};

const ROSTER_CSV: &str = "\
Office,Last_Name,First_Name,Middle_Name,District,Party,Geographic_Region,DC_Office_Address,DC_Zip,DC_Phone,Website,Contact_Form,Email,Facebook,Twitter_X,Instagram,TikTok,AIPAC_Funded,War_Industrial_Complex_Funded
U.S. Senate,Scott,Rick,,Statewide,Republican,,,,,,,,,,,,No,No
U.S. Senate,Moody,Ashley,,Statewide,Republican,,,,,,,,,,,,No,No
U.S. House,Salazar,Maria,Elvira,FL-27,Republican,Miami,,,(202) 225-3931,,,,,,,,No,No
U.S. House,Luna,Anna,Paulina,FL-13,Republican,St. Petersburg,,,,,,,,,,,No,No
";

const FUNDING_CSV: &str = "\
CAND_NAME,CAND_OFFICE,CAND_OFFICE_DISTRICT,CAND_OFFICE_ST,total_amount,mic_total_amount
\"SALAZAR, MARIA ELVIRA\",H,27,FL,1234567,0
\"PAULINA LUNA, ANNA\",H,13,FL,0,98500
\"SCOTT, RICK\",S,,FL,500000,250000
\"PELOSI, NANCY\",H,11,CA,100,100
\"UNKNOWN, PERSON\",H,1,FL,5,5
";

fn imported_db() -> Db {
    let mut db = Db::open_in_memory().unwrap();
    db.init().unwrap();
    let report = import::read_roster_csv(ROSTER_CSV.as_bytes(), "FL").unwrap();
    assert!(report.skipped.is_empty());
    db.upsert_officials(&report.officials).unwrap();
    db
}

fn run_funding_pass(db: &Db) -> reconcile::BatchReport {
    let records = reconcile::read_funding_csv(FUNDING_CSV.as_bytes()).unwrap();
    let roster = db
        .search(&SearchFilter {
            state: Some("FL".to_string()),
            ..Default::default()
        })
        .unwrap();
    let report = reconcile::reconcile_batch(&records, &roster, "FL");
    for update in &report.matched {
        db.apply_funding_update(update).unwrap();
    }
    report
}

#[test]
fn funding_pass_updates_matched_officials_only() {
    let db = imported_db();
    let report = run_funding_pass(&db);

    assert_eq!(report.matched.len(), 3);
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.skipped_other_state, 1);

    let salazar = db.house_rep_by_district("FL-27").unwrap().unwrap();
    assert_eq!(salazar.aipac_funded, "$1,234,567");
    assert_eq!(salazar.war_industry_funded, "No");

    // Reached through the correction table.
    let luna = db.house_rep_by_district("FL-13").unwrap().unwrap();
    assert_eq!(luna.aipac_funded, "No");
    assert_eq!(luna.war_industry_funded, "$98,500");

    let senators = db.senators_by_state("FL").unwrap();
    let scott = senators.iter().find(|s| s.last_name == "Scott").unwrap();
    assert_eq!(scott.aipac_funded, "$500,000");
    let moody = senators.iter().find(|s| s.last_name == "Moody").unwrap();
    assert_eq!(moody.aipac_funded, "No");
}

#[test]
fn running_the_same_batch_twice_is_a_no_op() {
    let db = imported_db();
    run_funding_pass(&db);
    let first: Vec<_> = db
        .search(&SearchFilter::default())
        .unwrap()
        .into_iter()
        .map(|o| (o.external_id, o.aipac_funded, o.war_industry_funded))
        .collect();

    run_funding_pass(&db);
    let second: Vec<_> = db
        .search(&SearchFilter::default())
        .unwrap()
        .into_iter()
        .map(|o| (o.external_id, o.aipac_funded, o.war_industry_funded))
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn zip_lookup_sees_imported_roster_and_funding() {
    let db = imported_db();
    run_funding_pass(&db);

    let service = LookupService::new(&db);
    let result = service.lookup_zip("33139").await.unwrap();

    assert!(result.success);
    assert_eq!(result.district.as_deref(), Some("FL-27"));
    let rep = result.house_rep.unwrap();
    assert_eq!(rep.last_name, "Salazar");
    assert_eq!(rep.aipac_funded, "$1,234,567");
    assert_eq!(result.senators.len(), 2);
}
