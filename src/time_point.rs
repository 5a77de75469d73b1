//! Timezone-aware instant within a day, with millisecond precision.
use crate::{
    unit::{HourOfDay, Meridian, TimeOfDay},
    Result, SpecError,
};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use std::fmt::Display;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * MILLIS_PER_SECOND;

/// Instant within a day, stored as milliseconds elapsed since UTC midnight.
///
/// The value isn't tied to any particular calendar date: it models a moment
/// within *some* day. Equality and ordering use the millisecond offset as the
/// sole key. Arithmetic is plain integer arithmetic over the offset, so adding
/// a duration which crosses midnight produces an offset beyond a single day's
/// span; interpreting such values is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimePointOfDay {
    millis: i64,
}

impl TimePointOfDay {
    /// Midnight in UTC, the zero offset.
    pub const UTC_MIDNIGHT: TimePointOfDay = TimePointOfDay { millis: 0 };
    /// Noon in UTC.
    pub const UTC_NOON: TimePointOfDay = TimePointOfDay {
        millis: MILLIS_PER_DAY / 2,
    };

    /// Returns the instant at the provided wall-clock fields in the provided timezone.
    ///
    /// Fields are validated first (hour `0..=23`, minute and second `0..=59`,
    /// millisecond `0..=999`), then resolved in `zone` and normalized to a
    /// UTC-midnight-relative offset.
    pub fn at<Tz: TimeZone>(hour: u8, minute: u8, second: u8, millisecond: u16, zone: &Tz) -> Result<Self> {
        let time = TimeOfDay::from_hms_milli(hour, minute, second, millisecond)?;
        Self::from_time_of_day(&time, zone)
    }

    /// Returns the instant at the provided 12-hour wall-clock fields
    /// in the provided timezone.
    ///
    /// Returns [`SpecError::OutOfRange`] if the hour is outside of `1..=12`.
    pub fn at_12hr<Tz: TimeZone>(
        hour: u8,
        meridian: Meridian,
        minute: u8,
        second: u8,
        millisecond: u16,
        zone: &Tz,
    ) -> Result<Self> {
        let hour = HourOfDay::from_12hr(hour, meridian)?;
        Self::at(hour.value(), minute, second, millisecond, zone)
    }

    /// Returns the instant at the provided wall-clock fields in UTC.
    pub fn at_utc(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self> {
        Self::at(hour, minute, second, millisecond, &Utc)
    }

    /// Returns the instant at the provided [`TimeOfDay`] in the provided timezone.
    ///
    /// An ambiguous local time (DST overlap) resolves to the earliest instant;
    /// a local time skipped by a DST transition returns
    /// [`SpecError::NonexistentLocalTime`].
    pub fn from_time_of_day<Tz: TimeZone>(time: &TimeOfDay, zone: &Tz) -> Result<Self> {
        // Fields are already validated, so the chrono constructors can't fail.
        let local = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_milli_opt(
                time.hour().value() as u32,
                time.minute().value() as u32,
                time.second() as u32,
                time.millisecond() as u32,
            )
            .unwrap();

        let resolved = zone
            .from_local_datetime(&local)
            .earliest()
            .ok_or_else(|| SpecError::NonexistentLocalTime(format!("{time} was skipped by a DST transition")))?;

        Ok(Self {
            millis: resolved.timestamp_millis(),
        })
    }

    /// Returns the instant with the provided offset from UTC midnight, in milliseconds.
    ///
    /// Offsets beyond the span of representable calendar dates are clamped to
    /// the nearest representable instant.
    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        Self {
            millis: millis.clamp(
                DateTime::<Utc>::MIN_UTC.timestamp_millis(),
                DateTime::<Utc>::MAX_UTC.timestamp_millis(),
            ),
        }
    }

    /// Parses wall-clock text with the provided [`chrono` format pattern] and
    /// resolves it in the provided timezone.
    ///
    /// Returns [`SpecError::TimeParse`] if the text doesn't match the pattern.
    ///
    /// [`chrono` format pattern]: https://docs.rs/chrono/latest/chrono/format/strftime/index.html
    pub fn parse<Tz: TimeZone>(text: &str, pattern: &str, zone: &Tz) -> Result<Self> {
        let time = NaiveTime::parse_from_str(text, pattern)?;
        Self::from_time_of_day(&TimeOfDay::from_chrono(&time), zone)
    }

    /// Same as [`parse`](Self::parse), resolving the text as UTC.
    pub fn parse_utc(text: &str, pattern: &str) -> Result<Self> {
        Self::parse(text, pattern, &Utc)
    }

    /// Projects this instant into wall-clock fields of the provided timezone.
    pub fn as_time_of_day<Tz: TimeZone>(&self, zone: &Tz) -> TimeOfDay {
        // Offsets are clamped to the representable range at construction.
        let utc = DateTime::from_timestamp_millis(self.millis).unwrap();
        TimeOfDay::from_chrono(&utc.with_timezone(zone))
    }

    /// Returns the instant `duration` later than this one.
    ///
    /// There is no day rollover: the result may exceed a single day's span.
    /// Saturates at the latest representable instant.
    pub fn plus(&self, duration: TimeDelta) -> Self {
        Self::from_millis(self.millis.saturating_add(duration.num_milliseconds()))
    }

    /// Returns the instant `duration` earlier than this one.
    ///
    /// There is no day rollover: the result may precede UTC midnight.
    /// Saturates at the earliest representable instant.
    pub fn minus(&self, duration: TimeDelta) -> Self {
        Self::from_millis(self.millis.saturating_sub(duration.num_milliseconds()))
    }

    /// Returns `true` if this instant is strictly later than `other`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self.millis > other.millis
    }

    /// Returns `true` if this instant is strictly earlier than `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self.millis < other.millis
    }

    /// Returns the offset from UTC midnight, in milliseconds.
    #[inline]
    pub fn millis_from_midnight(&self) -> i64 {
        self.millis
    }

    /// Returns the offset from UTC midnight, in whole seconds.
    #[inline]
    pub fn secs_from_midnight(&self) -> i64 {
        self.millis / MILLIS_PER_SECOND
    }
}

impl Display for TimePointOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Z", self.as_time_of_day(&Utc))
    }
}
