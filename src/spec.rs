//! Composable recurring date specifications and occurrence search.
use crate::{
    month::CalendarMonth,
    unit::{DayOfMonth, DayOfWeek},
    Result, SpecError,
};
use chrono::{Datelike, NaiveDate};

/// Date specification pinned to the structure of a calendar month.
///
/// Unlike the general [`DateSpecification`], monthly specifications compute
/// their single qualifying date per month analytically, without scanning,
/// via [`date_in`](Self::date_in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonthlyDateSpecification {
    /// The date with a fixed day number, e.g. "the 25th of every month".
    FixedDay(DayOfMonth),
    /// The Nth occurrence of a weekday, e.g. "the 3rd Monday of every month".
    Floating {
        /// Target day of the week.
        day_of_week: DayOfWeek,
        /// Occurrence index within the month, `1..=5`.
        occurrence: u8,
    },
}

impl MonthlyDateSpecification {
    /// Returns the specification of a fixed day number in every month.
    pub fn fixed_day(day: DayOfMonth) -> Self {
        Self::FixedDay(day)
    }

    /// Returns the specification of the `occurrence`-th `day_of_week` in every month.
    ///
    /// Returns [`SpecError::OutOfRange`] if the occurrence is outside of `1..=5`.
    pub fn floating(day_of_week: DayOfWeek, occurrence: u8) -> Result<Self> {
        if !(1..=5).contains(&occurrence) {
            return Err(SpecError::OutOfRange(format!(
                "occurrence {occurrence}, please use a value between 1 and 5"
            )));
        }
        Ok(Self::Floating { day_of_week, occurrence })
    }

    /// Returns `true` if the provided date is the one this specification
    /// selects within the date's own month.
    ///
    /// Satisfaction is always reduced to the constructive computation of
    /// [`date_in`](Self::date_in), so the two operations can never disagree;
    /// a month where the computation fails simply satisfies nothing.
    pub fn is_satisfied_by(&self, date: NaiveDate) -> bool {
        self.date_in(CalendarMonth::from_date(date)) == Ok(date)
    }

    /// Computes the date this specification selects within the provided month.
    ///
    /// For the floating variant the day number is derived from the weekday of
    /// the month's first day; requesting an occurrence the month doesn't have
    /// (e.g. a 5th Friday in a four-Friday month) propagates
    /// [`SpecError::OutOfRange`] from the date construction instead of
    /// clamping or wrapping into another month.
    pub fn date_in(&self, month: CalendarMonth) -> Result<NaiveDate> {
        match self {
            Self::FixedDay(day) => month.date_of(*day),
            Self::Floating { day_of_week, occurrence } => {
                let first_day_code = DayOfWeek::from(month.first_day().weekday()).code() as i16;
                let offset = day_of_week.code() as i16 - first_day_code;
                let first_occurrence = offset + if offset < 0 { 8 } else { 1 };
                let day = (*occurrence as i16 - 1) * 7 + first_occurrence;

                // Days beyond 31 are rejected right here, days the concrete
                // month can't hold are rejected by the month itself.
                let day = u8::try_from(day)
                    .map_err(|_| SpecError::OutOfRange(format!("computed day of month {day}")))
                    .and_then(DayOfMonth::new)?;
                month.date_of(day)
            }
        }
    }
}

/// Composable predicate over calendar dates.
///
/// Every variant is a pure, side-effect-free predicate; values are immutable
/// once built and safe to share across threads. Composites (`And`/`Or`/`Not`)
/// have no analytically computable occurrence, so searching them goes through
/// the bounded [`first_occurrence_since`](Self::first_occurrence_since)/
/// [`last_occurrence_until`](Self::last_occurrence_until) scans.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSpecification {
    /// One literal calendar date.
    Fixed(NaiveDate),
    /// Any date whose weekday is a member of the set.
    DayOfWeekSet(Vec<DayOfWeek>),
    /// A monthly specification, see [`MonthlyDateSpecification`].
    Monthly(MonthlyDateSpecification),
    /// Negation of the child specification.
    Not(Box<DateSpecification>),
    /// Conjunction of both child specifications.
    And(Box<DateSpecification>, Box<DateSpecification>),
    /// Disjunction of both child specifications.
    Or(Box<DateSpecification>, Box<DateSpecification>),
}

impl DateSpecification {
    /// Returns the specification satisfied by the single provided date.
    pub fn fixed(date: NaiveDate) -> Self {
        Self::Fixed(date)
    }

    /// Returns the specification satisfied by any date falling on the provided weekday.
    pub fn day_of_week(day: DayOfWeek) -> Self {
        Self::DayOfWeekSet(vec![day])
    }

    /// Returns the specification satisfied by any date whose weekday is in the
    /// provided set.
    ///
    /// An empty set is legal and satisfies no date at all; searching such a
    /// specification relies on the caller-supplied lookahead bound.
    pub fn day_of_week_set(days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        Self::DayOfWeekSet(days.into_iter().collect())
    }

    /// Returns the specification of a fixed day number in every month.
    pub fn monthly_day(day: DayOfMonth) -> Self {
        Self::Monthly(MonthlyDateSpecification::fixed_day(day))
    }

    /// Returns the specification of the `occurrence`-th `day_of_week` in every month.
    ///
    /// Returns [`SpecError::OutOfRange`] if the occurrence is outside of `1..=5`.
    pub fn monthly_floating(day_of_week: DayOfWeek, occurrence: u8) -> Result<Self> {
        Ok(Self::Monthly(MonthlyDateSpecification::floating(day_of_week, occurrence)?))
    }

    /// Returns the conjunction of this specification and `other`.
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Returns the disjunction of this specification and `other`.
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Returns the negation of this specification.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Returns `true` if the provided date satisfies this specification.
    ///
    /// Total predicate: never fails for any valid date.
    pub fn is_satisfied_by(&self, date: NaiveDate) -> bool {
        match self {
            Self::Fixed(fixed) => *fixed == date,
            Self::DayOfWeekSet(days) => days.contains(&DayOfWeek::from(date.weekday())),
            Self::Monthly(monthly) => monthly.is_satisfied_by(date),
            Self::Not(child) => !child.is_satisfied_by(date),
            Self::And(left, right) => left.is_satisfied_by(date) && right.is_satisfied_by(date),
            Self::Or(left, right) => left.is_satisfied_by(date) || right.is_satisfied_by(date),
        }
    }

    /// Returns the earliest satisfying date among `start` and the following
    /// days, examining at most `max_lookahead` dates.
    ///
    /// `Ok(None)` means nothing within the window satisfies the specification;
    /// this is the only way to search composites and weekday sets, which have
    /// no analytic occurrence, and the bound is what keeps an unsatisfiable
    /// composite from scanning forever.
    ///
    /// Returns [`SpecError::InvalidArgument`] for a zero-length window.
    pub fn first_occurrence_since(&self, start: NaiveDate, max_lookahead: u32) -> Result<Option<NaiveDate>> {
        if max_lookahead == 0 {
            return Err(SpecError::InvalidArgument("search window must be at least one day".into()));
        }
        Ok(scan_forward(self, start, max_lookahead))
    }

    /// Returns the latest satisfying date among `end` and the preceding days,
    /// examining at most `max_lookback` dates.
    ///
    /// Returns [`SpecError::InvalidArgument`] for a zero-length window.
    pub fn last_occurrence_until(&self, end: NaiveDate, max_lookback: u32) -> Result<Option<NaiveDate>> {
        if max_lookback == 0 {
            return Err(SpecError::InvalidArgument("search window must be at least one day".into()));
        }

        let mut date = end;
        for _ in 0..max_lookback {
            if self.is_satisfied_by(date) {
                return Ok(Some(date));
            }
            match date.pred_opt() {
                Some(previous) => date = previous,
                None => break,
            }
        }
        Ok(None)
    }

    /// Returns iterator of satisfying dates starting from `start` (inclusively).
    ///
    /// Each iteration step scans at most `max_lookahead` days past the previous
    /// hit, so iteration over a specification with an empty satisfying set
    /// terminates instead of spinning; a zero `max_lookahead` yields nothing.
    pub fn iter(&self, start: NaiveDate, max_lookahead: u32) -> DateIterator {
        DateIterator {
            next: scan_forward(self, start, max_lookahead),
            spec: self.clone(),
            max_lookahead,
        }
    }
}

impl From<MonthlyDateSpecification> for DateSpecification {
    fn from(value: MonthlyDateSpecification) -> Self {
        Self::Monthly(value)
    }
}

/// Day-by-day bounded scan shared by the forward search and the iterator.
fn scan_forward(spec: &DateSpecification, start: NaiveDate, max_lookahead: u32) -> Option<NaiveDate> {
    let mut date = start;
    for _ in 0..max_lookahead {
        if spec.is_satisfied_by(date) {
            return Some(date);
        }
        date = date.succ_opt()?;
    }
    None
}

/// Contains iterator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateIterator {
    spec: DateSpecification,
    next: Option<NaiveDate>,
    max_lookahead: u32,
}

impl Iterator for DateIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .succ_opt()
            .and_then(|start| scan_forward(&self.spec, start, self.max_lookahead));
        Some(current)
    }
}
