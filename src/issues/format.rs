// Display formatting for issues.
// Currently passthroughs; kept separate so callers have one place to hook into.

use crate::api::Issue;

/// Title as shown to readers.
pub fn format_issue_title(issue: &Issue) -> &str {
    &issue.title
}

/// Period as shown to readers, e.g. "July–September 2025".
pub fn format_issue_period(issue: &Issue) -> &str {
    &issue.period
}
