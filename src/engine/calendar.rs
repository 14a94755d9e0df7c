use chrono::{Datelike, Duration, NaiveDate};

use crate::date_range::ParseError;

/// Build a `NaiveDate`, failing loudly on components no calendar accepts.
pub(crate) fn make_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ParseError::InvalidDate { year: i64::from(year), month, day })
}

/// Number of days in `month` of `year`: the day before the first of the
/// following month.
pub(crate) fn days_in_month(year: i32, month: u32) -> Result<u32, ParseError> {
    make_date(year, month, 1)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_of_next = make_date(next_year, next_month, 1)?;
    Ok((first_of_next - Duration::days(1)).day())
}

/// Shift `date` by whole calendar months, clamping the day to the target
/// month's length (2025-03-31 plus one month is 2025-04-30).
pub(crate) fn shift_months(date: NaiveDate, months: i64) -> Result<NaiveDate, ParseError> {
    let zero_based = i64::from(date.month()) - 1 + months;
    let wide_year = i64::from(date.year()) + zero_based.div_euclid(12);
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    let year = i32::try_from(wide_year)
        .map_err(|_| ParseError::InvalidDate { year: wide_year, month, day: 1 })?;
    let day = date.day().min(days_in_month(year, month)?);
    make_date(year, month, day)
}

/// Shift `date` by whole calendar years, with the same day clamping
/// (a February 29 anchor lands on February 28).
pub(crate) fn shift_years(date: NaiveDate, years: i64) -> Result<NaiveDate, ParseError> {
    shift_months(date, years * 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn shift_months_clamps_the_day() {
        assert_eq!(shift_months(date(2025, 3, 31), 1).unwrap(), date(2025, 4, 30));
        assert_eq!(shift_months(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn shift_months_crosses_year_boundaries_both_ways() {
        assert_eq!(shift_months(date(2025, 1, 15), -1).unwrap(), date(2024, 12, 15));
        assert_eq!(shift_months(date(2024, 11, 1), 3).unwrap(), date(2025, 2, 1));
    }

    #[test]
    fn shift_years_clamps_leap_days() {
        assert_eq!(shift_years(date(2024, 2, 29), 1).unwrap(), date(2025, 2, 28));
        assert_eq!(shift_years(date(2025, 6, 15), -3).unwrap(), date(2022, 6, 15));
    }

    #[test]
    fn days_in_month_handles_february_and_december() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2025, 2).unwrap(), 28);
        assert_eq!(days_in_month(2025, 12).unwrap(), 31);
    }

    #[test]
    fn out_of_range_components_fail_loudly() {
        assert_eq!(
            make_date(2025, 13, 1),
            Err(ParseError::InvalidDate { year: 2025, month: 13, day: 1 })
        );
        assert!(days_in_month(2025, 83).is_err());
    }
}
