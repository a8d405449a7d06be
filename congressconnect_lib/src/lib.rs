//! Library layer for Congress Connect: roster store, district resolution,
//! funding reconciliation, and the ZIP lookup service.
//!
//! The store is a SQLite roster of federal officials for a single state.
//! Batch pipelines import the roster from CSV, reconcile external funding
//! records against it, and populate election-calendar fields. The lookup
//! service composes the district resolver with the store to answer
//! "who represents this ZIP code" queries.

pub mod db;
pub mod elections;
pub mod import;
pub mod lookup;
pub mod models;
pub mod reconcile;
pub mod resolver;
pub mod validation;

pub use civicinfo_api;

pub use db::{Db, DbError, FundingFilter, RosterStats, SearchFilter};
pub use lookup::{LookupService, ZipLookup};
pub use models::{Office, Official, NO_FUNDING};
pub use reconcile::{BatchReport, FundingRecord, FundingUpdate, MatchResult, UnmatchedReason};
pub use resolver::{DistrictInfo, ResolveError, Source};
