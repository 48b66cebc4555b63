// Publish status and badge classification for issues.
// Decides whether an issue is shown as published or upcoming.

use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};
use tracing::debug;

use crate::api::Issue;

use super::period::parse_issue_period;

/// Publish status shown next to an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    Published,
    Upcoming,
}

impl IssueStatus {
    /// Text shown in the badge.
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Published => "Published",
            IssueStatus::Upcoming => "Upcoming",
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            IssueStatus::Published => "badge-success",
            IssueStatus::Upcoming => "badge-under",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of `issue` against the wall clock.
pub fn get_issue_status(issue: &Issue) -> IssueStatus {
    get_issue_status_at(issue, Utc::now())
}

/// Status of `issue` as of `now`.
///
/// Issues with articles are published. Empty issues are upcoming until the
/// start of the last day of their period, and upcoming when the period
/// cannot be parsed.
pub fn get_issue_status_at(issue: &Issue, now: DateTime<Utc>) -> IssueStatus {
    if issue.article_count > 0 {
        return IssueStatus::Published;
    }

    match parse_issue_period(&issue.period) {
        Ok(end_date) => {
            if end_date.and_time(NaiveTime::MIN).and_utc() > now {
                IssueStatus::Upcoming
            } else {
                IssueStatus::Published
            }
        }
        Err(e) => {
            debug!(period = %issue.period, error = %e, "unparseable issue period");
            IssueStatus::Upcoming
        }
    }
}

/// Badge class for `issue` against the wall clock.
pub fn get_issue_badge_class(issue: &Issue) -> &'static str {
    get_issue_status(issue).badge_class()
}

/// Badge class for `issue` as of `now`.
pub fn get_issue_badge_class_at(issue: &Issue, now: DateTime<Utc>) -> &'static str {
    get_issue_status_at(issue, now).badge_class()
}
