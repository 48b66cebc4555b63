// Issue display helpers.
// Pure functions deriving titles, periods, publish status and badges from an Issue.

pub mod format;
pub mod period;
pub mod status;

pub use format::{format_issue_period, format_issue_title};
pub use period::parse_issue_period;
pub use status::{
    IssueStatus, get_issue_badge_class, get_issue_badge_class_at, get_issue_status,
    get_issue_status_at,
};
