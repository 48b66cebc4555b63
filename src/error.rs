// Error types for issue-desk.
// Covers transport, API-level and configuration failures plus period parsing.

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when the server reports failure without saying why.
pub const DEFAULT_API_ERROR: &str = "Failed to fetch articles";

#[derive(Error, Debug)]
pub enum IssuesError {
    #[error("HTTP error! status: {status}")]
    Transport { status: StatusCode },

    #[error("{0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IssuesError>;

/// Why a period string could not be turned into an end date.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodParseError {
    #[error("no 4-digit year in period")]
    NoYear,

    #[error("no month name in period")]
    NoMonth,

    #[error("period does not resolve to a valid date")]
    InvalidDate,
}
