// Issues feed API module.
// Provides the HTTP client and response types for the issues endpoint.

pub mod client;
pub mod types;

pub use client::{IssuesClient, IssuesSource};
pub use types::*;
