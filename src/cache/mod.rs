// Cache module for the issues feed.
// Keeps the last good payload in memory and refreshes it after a TTL.

pub mod store;

pub use store::{CachedIssues, DEFAULT_TTL, IssueCache};
