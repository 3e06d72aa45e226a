//! Calendar date coercion for snapshot input.
//!
//! # Invariants
//! - Output is always a plain calendar date; time-of-day and offsets are
//!   dropped after normalizing to UTC.
//! - Export writes `YYYY-MM-DD`; import accepts the wider set below.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Text that could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unparseable date `{}`", self.input)
    }
}

impl Error for DateParseError {}

/// Parses a date from any of the accepted textual forms.
///
/// Accepted: `YYYY-MM-DD`, RFC 3339 (`2024-05-01T10:00:00.000Z`), naive
/// date-times, RFC 2822.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, EXPORT_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.with_timezone(&Utc).date_naive());
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(stamp.date());
        }
    }
    if let Ok(stamp) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(stamp.with_timezone(&Utc).date_naive());
    }

    Err(DateParseError {
        input: value.to_string(),
    })
}

/// Formats a date the way snapshots store it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(EXPORT_DATE_FORMAT).to_string()
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
