use chrono::{Datelike, NaiveDate};

use crate::Token;
use crate::date_range::{DateObject, DateRange, ParseError};
use crate::engine::calendar::{days_in_month, make_date, shift_months, shift_years};
use crate::keywords::{AnchorKind, DateUnit, Keyword};

/// One of the two date slots of the open range. `None` is "unset".
///
/// Intermediate values carry no bounds; only a fully-specified slot is
/// expected to be calendar-valid, and only when its fields were computed
/// rather than copied verbatim from input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PartialDate {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
}

impl PartialDate {
    fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    fn set_full(&mut self, date: NaiveDate) {
        self.year = Some(date.year());
        self.month = Some(date.month());
        self.day = Some(date.day());
    }

    fn complete(&self) -> Option<DateObject> {
        Some(DateObject { year: self.year?, month: self.month?, day: self.day? })
    }
}

/// The token classifier and range accumulator.
///
/// Walks the token stream once, filling the `from`/`to` slots. A write that
/// would collide with an already-filled slot first flushes the open range
/// (defaults filled, appended) and restarts on reset accumulators; a range
/// is emitted the moment all six fields are known. The reference date is
/// snapshotted at construction and used by every relative rule.
#[derive(Debug)]
pub(crate) struct RangeBuilder {
    reference: NaiveDate,
    from: PartialDate,
    to: PartialDate,
    pending: Option<i32>,
    ranges: Vec<DateRange>,
}

impl RangeBuilder {
    pub(crate) fn new(reference: NaiveDate) -> Self {
        Self {
            reference,
            from: PartialDate::default(),
            to: PartialDate::default(),
            pending: None,
            ranges: Vec::new(),
        }
    }

    /// Feed one token through the classifier.
    pub(crate) fn push(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::Number(number) => {
                // Two numbers with no unit between them: the first applies
                // as an implicit filler before the new one loads.
                if let Some(pending) = self.pending.take() {
                    self.fill_absolute(pending, None)?;
                }
                self.pending = (number != 0).then_some(number);
            }
            Token::Keyword(Keyword::Unit(unit)) => {
                // A unit marker with no number to attach is a no-op.
                if let Some(pending) = self.pending.take() {
                    self.fill_absolute(pending, Some(unit))?;
                }
            }
            Token::Keyword(Keyword::Anchor(anchor)) => {
                // Anchors read the pending number without consuming it.
                let number = self.pending.unwrap_or(0);
                self.fill_relative(number, anchor)?;
            }
        }
        Ok(())
    }

    /// Flush whatever range is still open and return the emitted list.
    pub(crate) fn finish(mut self) -> Result<Vec<DateRange>, ParseError> {
        self.flush()?;
        Ok(self.ranges)
    }

    // --- Absolute units ------------------------------------------------------

    fn fill_absolute(&mut self, number: i32, unit: Option<DateUnit>) -> Result<(), ParseError> {
        match unit {
            Some(DateUnit::Year) => {
                if number > 1000 {
                    self.fill_year_slot(number)?;
                } else {
                    self.fill_offset_year(number)?;
                }
            }
            Some(DateUnit::Month) => {
                if self.from.month.is_none() {
                    self.from.month = Some(number as u32);
                } else if self.to.month.is_none() {
                    self.to.year = self.to.year.or(self.from.year);
                    self.to.month = Some(number as u32);
                } else {
                    self.flush()?;
                    self.from.month = Some(number as u32);
                }
            }
            Some(DateUnit::Day) => {
                if self.from.day.is_none() {
                    self.from.day = Some(number as u32);
                } else if self.to.day.is_none() {
                    self.to.year = self.to.year.or(self.from.year);
                    self.to.month = self.to.month.or(self.from.month);
                    self.to.day = Some(number as u32);
                } else {
                    self.flush()?;
                    self.from.day = Some(number as u32);
                }
            }
            // A number with no unit marker lands on the next open field.
            None => {
                if number > 1000 {
                    self.fill_year_slot(number)?;
                } else if self.from.month.is_none() {
                    self.from.month = Some(number as u32);
                } else if self.from.day.is_none() {
                    self.from.day = Some(number as u32);
                } else if self.to.month.is_none() {
                    self.to.month = Some(number as u32);
                } else if self.to.day.is_none() {
                    self.to.day = Some(number as u32);
                } else {
                    self.flush()?;
                    self.from.month = Some(number as u32);
                }
            }
        }

        self.try_complete();
        Ok(())
    }

    /// A small year count is an offset: first use anchors `from` at
    /// "`number` years before the reference", second use stretches `to` to
    /// "`number` years after the anchor".
    fn fill_offset_year(&mut self, number: i32) -> Result<(), ParseError> {
        if self.from.year.is_none() {
            self.from.year = Some(self.reference.year() - number);
        } else if self.to.year.is_none() {
            let anchor = self.from.year.unwrap_or_else(|| self.reference.year());
            self.to.year = Some(anchor.saturating_add(number));
        } else {
            self.flush()?;
            self.from.year = Some(self.reference.year() - number);
        }
        Ok(())
    }

    // --- Relative / anchor keywords -----------------------------------------

    fn fill_relative(&mut self, number: i32, anchor: AnchorKind) -> Result<(), ParseError> {
        match anchor {
            AnchorKind::LastYear => self.fill_year_slot(self.reference.year() - 1)?,
            AnchorKind::YearBeforeLast => self.fill_year_slot(self.reference.year() - 2)?,
            AnchorKind::ThisYear => self.fill_year_slot(self.reference.year())?,
            AnchorKind::ThisMonth => self.fill_month_slot(self.reference.month())?,
            AnchorKind::LastMonth => {
                let relative = shift_months(self.reference, -1)?;
                if self.from.year.is_none() {
                    self.from.year = Some(relative.year());
                    self.from.month = Some(relative.month());
                } else if self.to.year.is_none() {
                    self.to.year = Some(relative.year());
                    self.to.month = Some(relative.month());
                } else {
                    self.flush()?;
                    self.from.year = Some(relative.year());
                    self.from.month = Some(relative.month());
                }
            }
            AnchorKind::Today => {
                if self.from.year.is_none() {
                    self.from.set_full(self.reference);
                } else if self.to.year.is_none() {
                    self.to.set_full(self.reference);
                } else {
                    self.flush()?;
                    self.from.set_full(self.reference);
                }
            }
            AnchorKind::Quarter => {
                if self.from.month.is_some() || self.to.month.is_some() {
                    self.flush()?;
                }
                if let Some((start_month, end_month, end_day)) = quarter_bounds(number) {
                    self.from.month = Some(start_month);
                    self.from.day = Some(1);
                    self.to.year = self.from.year;
                    self.to.month = Some(end_month);
                    self.to.day = Some(end_day);
                }
            }
            AnchorKind::LastQuarter => {
                if self.from.month.is_some() || self.to.month.is_some() {
                    self.flush()?;
                }
                let relative = shift_months(self.reference, -3)?;
                let quarter = (relative.month() - 1) / 3 + 1;
                if let Some((start_month, end_month, end_day)) = quarter_bounds(quarter as i32) {
                    self.from.year = Some(relative.year());
                    self.from.month = Some(start_month);
                    self.from.day = Some(1);
                    self.to.year = Some(relative.year());
                    self.to.month = Some(end_month);
                    self.to.day = Some(end_day);
                }
            }
            AnchorKind::FirstHalf => {
                if self.from.month.is_some() || self.to.month.is_some() {
                    self.flush()?;
                }
                self.from.month = Some(1);
                self.from.day = Some(1);
                self.to.year = self.from.year;
                self.to.month = Some(6);
                self.to.day = Some(30);
            }
            AnchorKind::SecondHalf => {
                if self.from.month.is_some() || self.to.month.is_some() {
                    self.flush()?;
                }
                self.from.month = Some(7);
                self.from.day = Some(1);
                self.to.year = self.from.year;
                self.to.month = Some(12);
                self.to.day = Some(31);
            }
            AnchorKind::MonthSpan => self.fill_month_span(number)?,
            AnchorKind::YearSpan => self.fill_year_span(number)?,
        }

        self.try_complete();
        Ok(())
    }

    /// "N 개월": a month-granularity span.
    fn fill_month_span(&mut self, number: i32) -> Result<(), ParseError> {
        if self.from.year.is_some() && self.to.year.is_some() {
            self.flush()?;
        }
        if let Some(from_year) = self.from.year {
            // Anchored range: the span runs forward from the from-date.
            let anchor =
                make_date(from_year, self.from.month.unwrap_or(1), self.from.day.unwrap_or(1))?;
            let end = shift_months(anchor, i64::from(number))?;
            self.from.set_full(anchor);
            self.to.set_full(end);
        } else if let Some(from_month) = self.from.month {
            // Month-only anchor: pin it to the reference year, run forward.
            let anchor =
                make_date(self.reference.year(), from_month, self.from.day.unwrap_or(1))?;
            let end = shift_months(anchor, i64::from(number))?;
            self.from.year = Some(anchor.year());
            self.from.day = Some(anchor.day());
            self.to.set_full(end);
        } else {
            // No anchor: the N months ending at the reference date.
            let start = shift_months(self.reference, -i64::from(number))?;
            self.from.set_full(start);
            self.to.set_full(self.reference);
        }
        Ok(())
    }

    /// "N 개년" / "N 년치": the same span shape at year granularity, running
    /// backward from a reference-year anchor when nothing anchors it.
    fn fill_year_span(&mut self, number: i32) -> Result<(), ParseError> {
        if self.from.year.is_some() && self.to.year.is_some() {
            self.flush()?;
        }
        if let Some(from_year) = self.from.year {
            let anchor =
                make_date(from_year, self.from.month.unwrap_or(1), self.from.day.unwrap_or(1))?;
            let end = shift_years(anchor, i64::from(number))?;
            self.from.month = Some(anchor.month());
            self.from.day = Some(anchor.day());
            self.to.set_full(end);
        } else {
            let anchor = make_date(
                self.reference.year(),
                self.from.month.unwrap_or(1),
                self.from.day.unwrap_or(1),
            )?;
            let start = shift_years(anchor, -i64::from(number))?;
            self.from.set_full(start);
            self.to.set_full(anchor);
        }
        Ok(())
    }

    // --- Slot fills shared across rules --------------------------------------

    fn fill_year_slot(&mut self, year: i32) -> Result<(), ParseError> {
        if self.from.year.is_none() {
            self.from.year = Some(year);
        } else if self.to.year.is_none() {
            self.to.year = Some(year);
        } else {
            self.flush()?;
            self.from.year = Some(year);
        }
        Ok(())
    }

    fn fill_month_slot(&mut self, month: u32) -> Result<(), ParseError> {
        if self.from.month.is_none() {
            self.from.month = Some(month);
        } else if self.to.month.is_none() {
            self.to.month = Some(month);
        } else {
            self.flush()?;
            self.from.month = Some(month);
        }
        Ok(())
    }

    // --- Completion and finalization -----------------------------------------

    /// Emit the open range once every slot is filled, resetting for the
    /// next one.
    fn try_complete(&mut self) {
        if let (Some(from_date), Some(to_date)) = (self.from.complete(), self.to.complete()) {
            self.ranges.push(DateRange { from_date, to_date });
            self.from = PartialDate::default();
            self.to = PartialDate::default();
        }
    }

    /// Finalize the open range with contextual defaults, emit it, and reset
    /// the accumulators. A fully empty range is a no-op.
    ///
    /// `from` defaults to the first of the first month of the reference
    /// year. `to` closes at the reference day when the range starts in the
    /// reference year, and at the end of the trailing year otherwise.
    fn flush(&mut self) -> Result<(), ParseError> {
        if self.from.is_empty() && self.to.is_empty() {
            return Ok(());
        }

        let from_date = DateObject {
            year: self.from.year.unwrap_or_else(|| self.reference.year()),
            month: self.from.month.unwrap_or(1),
            day: self.from.day.unwrap_or(1),
        };

        let starts_in_reference_year = from_date.year == self.reference.year();
        let to_year = self.to.year.unwrap_or(from_date.year);
        let to_month = match self.to.month {
            Some(month) => month,
            None if starts_in_reference_year => self.reference.month(),
            None => 12,
        };
        let to_day = match self.to.day {
            Some(day) => day,
            None if starts_in_reference_year => self.reference.day(),
            None => days_in_month(to_year, to_month)?,
        };

        self.ranges.push(DateRange {
            from_date,
            to_date: DateObject { year: to_year, month: to_month, day: to_day },
        });
        self.from = PartialDate::default();
        self.to = PartialDate::default();
        Ok(())
    }
}

/// First month, last month and last day of quarter `n`, for `n` in 1..=4.
fn quarter_bounds(quarter: i32) -> Option<(u32, u32, u32)> {
    match quarter {
        1 => Some((1, 3, 31)),
        2 => Some((4, 6, 30)),
        3 => Some((7, 9, 30)),
        4 => Some((10, 12, 31)),
        _ => None,
    }
}
