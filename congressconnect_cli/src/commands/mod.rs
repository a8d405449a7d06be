//! CLI subcommand implementations.

pub mod browse;
pub mod district;
pub mod elections;
pub mod import;
pub mod lookup;
pub mod stats;
pub mod update_funding;
