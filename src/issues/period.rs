// Period string parsing.
// Resolves strings like "July–September 2025" to the last day of the end month.

use chrono::NaiveDate;

use crate::error::PeriodParseError;

/// Month names in calendar order. Matching takes the first hit in this order.
const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse the end date of an issue period.
///
/// The year is the first run of four digits anywhere in the string. The end
/// month is looked up in the text after the first `-`, `–` or `—`, or in the
/// whole string when there is no separator. Month names match as
/// case-insensitive substrings.
pub fn parse_issue_period(period: &str) -> Result<NaiveDate, PeriodParseError> {
    let year = find_year(period).ok_or(PeriodParseError::NoYear)?;

    let lower = period.to_lowercase();
    let mut parts = lower.split(|c: char| matches!(c, '-' | '–' | '—'));
    let first = parts.next().unwrap_or_default();
    let end_month = parts.next().unwrap_or(first).trim();

    let month = MONTHS
        .iter()
        .position(|name| end_month.contains(*name))
        .ok_or(PeriodParseError::NoMonth)?;

    last_day_of_month(year, month as u32 + 1).ok_or(PeriodParseError::InvalidDate)
}

fn find_year(s: &str) -> Option<i32> {
    s.as_bytes()
        .windows(4)
        .find(|w| w.iter().all(u8::is_ascii_digit))
        .and_then(|w| std::str::from_utf8(w).ok())
        .and_then(|digits| digits.parse().ok())
}

/// First day of the following month, minus one day.
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
