use chrono::{Local, NaiveDate};

use crate::date_range::{DateRange, ParseError};
use crate::engine;

/// Parsing context.
///
/// Holds the reference date every relative expression resolves against
/// ("작년", "지난 달", "3개월치", ...). The date is snapshotted once per
/// [`parse_with`] call; a parse never observes a day rollover halfway
/// through its own token stream.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference date used to resolve relative expressions.
    pub reference_date: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
            Self { reference_date: date }
        } else {
            Self { reference_date: Local::now().date_naive() }
        }
    }
}

/// Parse `text` with a default [`Context`] (the current local date).
///
/// # Example
/// ```
/// use naljja::parse;
///
/// let ranges = parse("2024년 1분기 매출").unwrap();
/// assert_eq!(ranges[0].from_date.year, 2024);
/// assert_eq!(ranges[0].to_date.month, 3);
/// ```
pub fn parse(text: &str) -> Result<Vec<DateRange>, ParseError> {
    parse_with(text, &Context::default())
}

/// Parse `text` against the provided `context`.
///
/// Use this when you want deterministic parsing by supplying a reference
/// date. Text without any recognizable keyword yields an empty list, and
/// malformed numerals degrade to fewer ranges; the only hard failure is a
/// genuinely invalid calendar-date construction
/// ([`ParseError::InvalidDate`]).
pub fn parse_with(text: &str, context: &Context) -> Result<Vec<DateRange>, ParseError> {
    engine::run(text, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference_context() -> Context {
        Context { reference_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap() }
    }

    #[test]
    fn parse_uses_the_fixed_test_reference() {
        let ranges = parse("올해 매출").unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].from_date.year, 2025);
    }

    #[test]
    fn parse_with_is_deterministic_per_reference() {
        let ctx = reference_context();
        let first = parse_with("지난 달 매출", &ctx).unwrap();
        let second = parse_with("지난 달 매출", &ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].from_date.month, 5);
    }

    #[test]
    fn empty_and_keywordless_inputs_yield_empty_lists() {
        let ctx = reference_context();
        assert_eq!(parse_with("", &ctx).unwrap(), vec![]);
        assert_eq!(parse_with("아무 날짜도 없음", &ctx).unwrap(), vec![]);
    }

    #[test]
    fn ranges_serialize_with_named_fields() {
        let ctx = reference_context();
        let ranges = parse_with("2024년 1분기 매출", &ctx).unwrap();
        let value = serde_json::to_value(&ranges).unwrap();
        assert_eq!(
            value,
            json!([{
                "from_date": {"year": 2024, "month": 1, "day": 1},
                "to_date": {"year": 2024, "month": 3, "day": 31},
            }])
        );
    }
}
