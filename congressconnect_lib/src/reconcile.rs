//! Reconciliation of external funding records against the roster.
//!
//! External records carry candidate names as `"LAST, FIRST MIDDLE"` plus an
//! office type code and district number. Matching is by normalized last name
//! and office/district, narrowing ambiguous hits by a 3-character first-name
//! prefix. Each record matches or misses independently; a batch never aborts
//! on a single bad record.

use serde::Deserialize;

use crate::models::{Office, Official, NO_FUNDING};

/// One row of the external funding dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct FundingRecord {
    /// Candidate name in `"LAST, FIRST MIDDLE"` form.
    #[serde(rename = "CAND_NAME")]
    pub cand_name: String,
    /// Office type code: `S` for Senate, anything else is House.
    #[serde(rename = "CAND_OFFICE")]
    pub office_code: String,
    #[serde(rename = "CAND_OFFICE_DISTRICT")]
    pub district_number: Option<f64>,
    #[serde(rename = "CAND_OFFICE_ST")]
    pub state: String,
    /// Primary-funder contribution total, whole dollars.
    #[serde(rename = "total_amount")]
    pub total_amount: Option<f64>,
    /// Secondary-funder (war industry) contribution total, whole dollars.
    #[serde(rename = "mic_total_amount")]
    pub mic_total_amount: Option<f64>,
}

/// The field update produced by a successful match. Applies exactly the two
/// funding flags to the identified official; raw amounts are retained for
/// report output only.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingUpdate {
    pub external_id: String,
    pub first_name: String,
    pub last_name: String,
    pub district: String,
    pub aipac_funded: String,
    pub war_industry_funded: String,
    pub aipac_amount: f64,
    pub war_industry_amount: f64,
}

/// Why a record failed to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedReason {
    /// The candidate name had no comma to split on.
    UnparseableName,
    /// No roster entry matched the office/district and last name.
    NoMatch,
    /// Multiple roster entries matched and the first-name prefix did not
    /// narrow them to one.
    Ambiguous,
}

impl UnmatchedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnmatchedReason::UnparseableName => "unparseable name",
            UnmatchedReason::NoMatch => "no match",
            UnmatchedReason::Ambiguous => "ambiguous match",
        }
    }
}

/// Outcome of reconciling one record.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    Matched(FundingUpdate),
    Unmatched {
        cand_name: String,
        reason: UnmatchedReason,
    },
}

/// Aggregate outcome of a reconciliation batch.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub matched: Vec<FundingUpdate>,
    pub unmatched: Vec<(String, UnmatchedReason)>,
    /// Records skipped because they belong to another state.
    pub skipped_other_state: usize,
}

/// Known name variants in the external source that the split-on-comma parse
/// gets wrong. An explicit exception list, not a heuristic: maps the
/// misparsed last name to the true (last, first) pair.
const NAME_CORRECTIONS: &[(&str, &str, &str)] = &[("PAULINA LUNA", "LUNA", "ANNA")];

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedName {
    last: String,
    first: String,
}

/// Splits `"LAST, FIRST MIDDLE"` on the first comma and takes the first
/// whitespace token of the right side as the first name, then applies the
/// known-variant corrections.
fn parse_candidate_name(cand_name: &str) -> Option<ParsedName> {
    let (last, rest) = cand_name.split_once(',')?;
    let last = last.trim().to_string();
    let first = rest
        .trim()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    for (variant, corrected_last, corrected_first) in NAME_CORRECTIONS {
        if last.eq_ignore_ascii_case(variant) {
            return Some(ParsedName {
                last: (*corrected_last).to_string(),
                first: (*corrected_first).to_string(),
            });
        }
    }

    Some(ParsedName { last, first })
}

/// Formats a raw contribution total as a funding flag: zero or absent yields
/// the `"No"` sentinel, anything positive a grouped whole-dollar amount.
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value > 0.0 => format!("${}", group_thousands(value as i64)),
        _ => NO_FUNDING.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Matches one external record against the roster.
pub fn match_record(record: &FundingRecord, roster: &[Official]) -> MatchResult {
    let Some(name) = parse_candidate_name(&record.cand_name) else {
        return MatchResult::Unmatched {
            cand_name: record.cand_name.clone(),
            reason: UnmatchedReason::UnparseableName,
        };
    };

    let candidates: Vec<&Official> = if record.office_code == "S" {
        // At most two senators per state; last name alone is expected to
        // disambiguate.
        roster
            .iter()
            .filter(|o| {
                o.office == Office::Senate && o.last_name.eq_ignore_ascii_case(&name.last)
            })
            .collect()
    } else {
        let district = match record.district_number {
            Some(num) => format!("{}-{:02}", record.state.to_uppercase(), num as i64),
            None => {
                return MatchResult::Unmatched {
                    cand_name: record.cand_name.clone(),
                    reason: UnmatchedReason::NoMatch,
                }
            }
        };
        roster
            .iter()
            .filter(|o| o.district == district && o.last_name.eq_ignore_ascii_case(&name.last))
            .collect()
    };

    let selected = match candidates.len() {
        0 => {
            return MatchResult::Unmatched {
                cand_name: record.cand_name.clone(),
                reason: UnmatchedReason::NoMatch,
            }
        }
        1 => candidates[0],
        _ => {
            // Narrow by the first 3 characters of the first name, the
            // literal rule observed in the source data.
            let prefix: String = name.first.to_uppercase().chars().take(3).collect();
            let narrowed: Vec<&Official> = candidates
                .into_iter()
                .filter(|o| o.first_name.to_uppercase().starts_with(&prefix))
                .collect();
            if narrowed.len() == 1 {
                narrowed[0]
            } else {
                return MatchResult::Unmatched {
                    cand_name: record.cand_name.clone(),
                    reason: UnmatchedReason::Ambiguous,
                };
            }
        }
    };

    let aipac_amount = record.total_amount.filter(|v| *v > 0.0).unwrap_or(0.0);
    let war_industry_amount = record.mic_total_amount.filter(|v| *v > 0.0).unwrap_or(0.0);

    MatchResult::Matched(FundingUpdate {
        external_id: selected.external_id.clone(),
        first_name: selected.first_name.clone(),
        last_name: selected.last_name.clone(),
        district: selected.district.clone(),
        aipac_funded: format_amount(record.total_amount),
        war_industry_funded: format_amount(record.mic_total_amount),
        aipac_amount,
        war_industry_amount,
    })
}

/// Reconciles a batch of records against the roster, keeping only records
/// for `target_state`. Per-record outcomes are independent.
pub fn reconcile_batch(
    records: &[FundingRecord],
    roster: &[Official],
    target_state: &str,
) -> BatchReport {
    let mut report = BatchReport::default();

    for record in records {
        if !record.state.eq_ignore_ascii_case(target_state) {
            report.skipped_other_state += 1;
            continue;
        }
        match match_record(record, roster) {
            MatchResult::Matched(update) => {
                tracing::debug!(
                    "matched {} {} ({})",
                    update.first_name,
                    update.last_name,
                    update.district
                );
                report.matched.push(update);
            }
            MatchResult::Unmatched { cand_name, reason } => {
                tracing::debug!("no match for {} ({})", cand_name, reason.as_str());
                report.unmatched.push((cand_name, reason));
            }
        }
    }

    report
}

/// Reads funding records from a CSV source.
pub fn read_funding_csv<R: std::io::Read>(reader: R) -> Result<Vec<FundingRecord>, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader.deserialize().collect()
}
