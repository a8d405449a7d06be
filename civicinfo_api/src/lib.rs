//! Minimal client for the Civic Information representatives API.
//!
//! Resolves a ZIP code to a congressional district by querying the
//! representatives endpoint and parsing the OCD division identifier of the
//! U.S. House office in the response.

mod client;
mod errors;
pub mod types;

pub use client::Client;
pub use errors::Error;
pub use types::Division;
