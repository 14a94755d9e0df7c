use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar date assembled by the parser.
///
/// Plain fields rather than a `chrono` date: a range is emitted the moment
/// all of its fields are known, even when explicit input supplied components
/// no calendar accepts. The builder validates what it *computes*, not what
/// it merely stores; dates produced by the finalizer's defaults are always
/// calendar-valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateObject {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for DateObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// An inclusive pair of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from_date: DateObject,
    pub to_date: DateObject,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.from_date, self.to_date)
    }
}

/// Errors surfaced by [`parse`](crate::parse) and
/// [`parse_with`](crate::parse_with).
///
/// Malformed input never errors: unusable tokens are dropped and the parse
/// degrades to fewer (or no) ranges. The one hard failure is asking the
/// calendar for a date that does not exist; out-of-range components are
/// reported, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A date was constructed, or month/year arithmetic was requested, with
    /// components outside the calendar's range.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i64, month: u32, day: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_display_pads_components() {
        let date = DateObject { year: 987, month: 4, day: 1 };
        assert_eq!(date.to_string(), "0987-04-01");
    }

    #[test]
    fn range_display_joins_both_ends() {
        let range = DateRange {
            from_date: DateObject { year: 2024, month: 1, day: 1 },
            to_date: DateObject { year: 2024, month: 12, day: 31 },
        };
        assert_eq!(range.to_string(), "2024-01-01 ~ 2024-12-31");
    }

    #[test]
    fn date_ordering_is_calendar_ordering() {
        let earlier = DateObject { year: 2024, month: 12, day: 31 };
        let later = DateObject { year: 2025, month: 1, day: 1 };
        assert!(earlier < later);
    }

    #[test]
    fn invalid_date_error_formats_components() {
        let err = ParseError::InvalidDate { year: 2025, month: 13, day: 1 };
        assert_eq!(err.to_string(), "invalid calendar date 2025-13-01");
    }
}
