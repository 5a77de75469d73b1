//! Calendar month arithmetic used by the monthly date specifications.
use crate::{unit::DayOfMonth, Result, SpecError};
use chrono::{Datelike, NaiveDate};
use std::fmt::Display;

/// Particular month of a particular year, e.g. `2024-11`.
///
/// Knows its own length and builds [`NaiveDate`]s from day numbers,
/// rejecting days the month cannot hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Returns the month with the provided year and month number.
    ///
    /// Returns [`SpecError::OutOfRange`] if the month is outside of `1..=12`
    /// or the year is outside of the range representable by [`NaiveDate`].
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if month == 0 || month > 12 {
            return Err(SpecError::OutOfRange(format!(
                "month {month}, please use a value between 1 and 12"
            )));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(SpecError::OutOfRange(format!("year {year} is out of the supported range")));
        }

        Ok(Self { year, month })
    }

    /// Returns the month the provided date belongs to.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year number.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number, `1..=12`.
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first date of this month.
    pub fn first_day(&self) -> NaiveDate {
        // Fields are validated at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Returns the last date of this month.
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day_count()).unwrap()
    }

    /// Returns the number of days in this month.
    pub fn day_count(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }

    /// Returns the date of the provided day within this month.
    ///
    /// Returns [`SpecError::OutOfRange`] if the day number exceeds
    /// the actual length of this month.
    pub fn date_of(&self, day: DayOfMonth) -> Result<NaiveDate> {
        let day = day.value() as u32;
        if day > self.day_count() {
            return Err(SpecError::OutOfRange(format!("day {day} doesn't exist in month {self}")));
        }
        Ok(NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap())
    }

    /// Returns the month `months` after this one (before, if negative).
    ///
    /// Returns [`SpecError::OutOfRange`] if the resulting year is out of
    /// the supported range.
    pub fn plus_months(&self, months: i32) -> Result<Self> {
        let zero_based = self
            .year
            .checked_mul(12)
            .and_then(|y| y.checked_add(self.month as i32 - 1))
            .and_then(|m| m.checked_add(months))
            .ok_or_else(|| SpecError::OutOfRange(format!("month {months} away from {self} is out of range")))?;

        Self::new(zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
    }
}

impl Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Returns `true` if provided year is leap.
#[inline]
fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
