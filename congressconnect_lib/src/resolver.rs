//! ZIP-code to congressional-district resolution.
//!
//! Resolution scans an ordered table of inclusive ZIP ranges, first match
//! wins. The built-in table is a deliberately sampled subset of Florida
//! ranges, not full coverage; [`coverage`] reports this so callers can
//! present a manual-selection fallback.

/// A resolved district with the resolution path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictInfo {
    /// District code, e.g. `FL-27`.
    pub district: String,
    /// Two-letter state code.
    pub state: String,
    pub source: Source,
}

/// Where a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The external civic-information provider.
    Provider,
    /// The built-in sampled range table.
    FallbackTable,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("ZIP code must be exactly 5 digits")]
    InvalidZip,
}

/// One range rule: inclusive ZIP bounds mapped to a district code.
#[derive(Debug, Clone, Copy)]
pub struct ZipRange {
    pub low: u32,
    pub high: u32,
    pub district: &'static str,
}

/// Sampled Florida ZIP ranges. Ordered; overlaps resolve to the first match.
const FL_ZIP_RANGES: &[ZipRange] = &[
    ZipRange { low: 32004, high: 32099, district: "FL-04" }, // Jacksonville
    ZipRange { low: 32301, high: 32399, district: "FL-02" }, // Tallahassee
    ZipRange { low: 32601, high: 32699, district: "FL-03" }, // Gainesville
    ZipRange { low: 33101, high: 33299, district: "FL-27" }, // Miami
    ZipRange { low: 33301, high: 33399, district: "FL-23" }, // Fort Lauderdale
    ZipRange { low: 33401, high: 33499, district: "FL-22" }, // West Palm Beach
    ZipRange { low: 33601, high: 33699, district: "FL-14" }, // Tampa
    ZipRange { low: 33701, high: 33799, district: "FL-13" }, // St. Petersburg
    ZipRange { low: 33901, high: 33999, district: "FL-19" }, // Fort Myers
    ZipRange { low: 34101, high: 34199, district: "FL-25" }, // Collier County
];

/// Reported coverage of the built-in table.
#[derive(Debug, Clone, Copy)]
pub struct Coverage {
    pub ranges: usize,
    /// Always false: the table samples real-world ranges, it does not cover
    /// every ZIP in the state.
    pub complete: bool,
}

pub fn coverage() -> Coverage {
    Coverage {
        ranges: FL_ZIP_RANGES.len(),
        complete: false,
    }
}

/// Validates a ZIP code: exactly 5 ASCII digits.
pub fn validate_zip(zip: &str) -> Result<(), ResolveError> {
    if zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ResolveError::InvalidZip)
    }
}

/// Resolves a ZIP code against the built-in sampled table.
///
/// `Ok(None)` is a legitimate unmapped outcome, not an error; only a
/// malformed ZIP fails.
pub fn resolve(zip: &str) -> Result<Option<DistrictInfo>, ResolveError> {
    validate_zip(zip)?;
    let zip_num: u32 = zip.parse().map_err(|_| ResolveError::InvalidZip)?;
    Ok(resolve_in(FL_ZIP_RANGES, zip_num))
}

fn resolve_in(table: &[ZipRange], zip_num: u32) -> Option<DistrictInfo> {
    table
        .iter()
        .find(|range| zip_num >= range.low && zip_num <= range.high)
        .map(|range| DistrictInfo {
            district: range.district.to_string(),
            state: range.district[..2].to_string(),
            source: Source::FallbackTable,
        })
}
