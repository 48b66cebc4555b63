// issue-desk: cached access to a magazine's issues feed.
// Fetches the feed over HTTP, keeps it in memory for a TTL and derives display data.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod issues;

pub use api::{Issue, IssuesClient, IssuesResponse, IssuesSource};
pub use cache::{CachedIssues, DEFAULT_TTL, IssueCache};
pub use config::Config;
pub use error::{IssuesError, PeriodParseError, Result};
pub use issues::{
    IssueStatus, format_issue_period, format_issue_title, get_issue_badge_class,
    get_issue_badge_class_at, get_issue_status, get_issue_status_at, parse_issue_period,
};
