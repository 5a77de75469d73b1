//! Range-checked scalar values of the clock and the calendar.
use crate::{Result, SpecError};
use chrono::{Timelike, Weekday};
use std::{fmt::Display, str::FromStr};

/// Particular day of the week, without any timezone or calendar context.
///
/// Carries a numeric code in the `1` (Sunday) to `7` (Saturday) convention.
/// Days are compared by identity only: there is no inherent ordering
/// within the weekly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DayOfWeek {
    /// Sunday, code 1.
    Sunday = 1,
    /// Monday, code 2.
    Monday = 2,
    /// Tuesday, code 3.
    Tuesday = 3,
    /// Wednesday, code 4.
    Wednesday = 4,
    /// Thursday, code 5.
    Thursday = 5,
    /// Friday, code 6.
    Friday = 6,
    /// Saturday, code 7.
    Saturday = 7,
}

impl DayOfWeek {
    /// Returns the day with the provided numeric code (1 is Sunday, 7 is Saturday).
    ///
    /// Returns [`SpecError::OutOfRange`] if the code is outside of `1..=7`.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Sunday),
            2 => Ok(Self::Monday),
            3 => Ok(Self::Tuesday),
            4 => Ok(Self::Wednesday),
            5 => Ok(Self::Thursday),
            6 => Ok(Self::Friday),
            7 => Ok(Self::Saturday),
            _ => Err(SpecError::OutOfRange(format!(
                "day of week code {code}, please use a value between 1 and 7"
            ))),
        }
    }

    /// Returns the numeric code of this day (1 is Sunday, 7 is Saturday).
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// Particular day of a month, `1..=31`.
///
/// Validation against the length of a concrete month is out of scope here,
/// it belongs to [`CalendarMonth::date_of`](crate::CalendarMonth::date_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    const MIN: u8 = 1;
    const MAX: u8 = 31;

    /// Returns the day of month with the provided number.
    ///
    /// Returns [`SpecError::OutOfRange`] if the number is outside of `1..=31`.
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SpecError::OutOfRange(format!(
                "day of month {value}, please use a value between 1 and 31"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the underlying day number.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if this day is strictly later in the month than `other`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns `true` if this day is strictly earlier in the month than `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl Display for DayOfMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Meridian indicator of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Meridian {
    /// Ante meridiem, hours before noon.
    Am,
    /// Post meridiem, noon and later.
    Pm,
}

impl FromStr for Meridian {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("AM") {
            Ok(Self::Am)
        } else if s.eq_ignore_ascii_case("PM") {
            Ok(Self::Pm)
        } else {
            Err(SpecError::InvalidFormat(format!(
                "meridian token {s:?}, please use AM or PM"
            )))
        }
    }
}

/// Particular hour of a day, `0..=23`, without date or timezone context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourOfDay(u8);

impl HourOfDay {
    const MIN: u8 = 0;
    const MAX: u8 = 23;

    /// Returns the hour with the provided 24-hour value.
    ///
    /// Returns [`SpecError::OutOfRange`] if the value is outside of `0..=23`.
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SpecError::OutOfRange(format!(
                "hour {value}, please use a value between 0 and 23"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the hour with the provided 12-hour value and meridian indicator.
    ///
    /// Returns [`SpecError::OutOfRange`] if the hour is outside of `1..=12`.
    pub fn from_12hr(hour: u8, meridian: Meridian) -> Result<Self> {
        if !(1..=12).contains(&hour) {
            return Err(SpecError::OutOfRange(format!(
                "12-hour clock hour {hour}, please use a value between 1 and 12"
            )));
        }
        let value = match meridian {
            Meridian::Am => hour % 12,
            Meridian::Pm => hour % 12 + 12,
        };
        Ok(Self(value))
    }

    /// Same as [`from_12hr`](Self::from_12hr), with the meridian given
    /// as a case-insensitive `"AM"`/`"PM"` token.
    ///
    /// Returns [`SpecError::InvalidFormat`] for any other token.
    pub fn from_12hr_token(hour: u8, meridian: &str) -> Result<Self> {
        Self::from_12hr(hour, Meridian::from_str(meridian)?)
    }

    /// Returns the underlying 24-hour value.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if this hour is strictly later in the day than `other`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns `true` if this hour is strictly earlier in the day than `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl Display for HourOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Particular minute of an hour, `0..=59`, without any wider time context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinuteOfHour(u8);

impl MinuteOfHour {
    const MIN: u8 = 0;
    const MAX: u8 = 59;

    /// Returns the minute with the provided value.
    ///
    /// Returns [`SpecError::OutOfRange`] if the value is outside of `0..=59`.
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SpecError::OutOfRange(format!(
                "minute {value}, please use a value between 0 and 59"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the underlying minute value.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if this minute is strictly later in the hour than `other`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns `true` if this minute is strictly earlier in the hour than `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl Display for MinuteOfHour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Wall-clock time of day with millisecond precision, without date or timezone.
///
/// This is what a [`TimePointOfDay`](crate::TimePointOfDay) projects to
/// under a concrete timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    hour: HourOfDay,
    minute: MinuteOfHour,
    second: u8,
    millisecond: u16,
}

impl TimeOfDay {
    /// Returns the time of day assembled from the provided fields.
    ///
    /// Returns [`SpecError::OutOfRange`] if any field is outside of its bounds:
    /// hour `0..=23`, minute and second `0..=59`, millisecond `0..=999`.
    pub fn from_hms_milli(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self> {
        if second > 59 {
            return Err(SpecError::OutOfRange(format!(
                "second {second}, please use a value between 0 and 59"
            )));
        }
        if millisecond > 999 {
            return Err(SpecError::OutOfRange(format!(
                "millisecond {millisecond}, please use a value between 0 and 999"
            )));
        }

        Ok(Self {
            hour: HourOfDay::new(hour)?,
            minute: MinuteOfHour::new(minute)?,
            second,
            millisecond,
        })
    }

    /// Converts time fields of any `chrono` time-like value, with sub-millisecond
    /// precision (and a possible leap second) truncated.
    pub(crate) fn from_chrono(time: &impl Timelike) -> Self {
        Self {
            hour: HourOfDay(time.hour() as u8),
            minute: MinuteOfHour(time.minute() as u8),
            second: time.second() as u8,
            millisecond: ((time.nanosecond() / 1_000_000) as u16).min(999),
        }
    }

    /// Returns the hour of day.
    #[inline]
    pub fn hour(&self) -> HourOfDay {
        self.hour
    }

    /// Returns the minute of hour.
    #[inline]
    pub fn minute(&self) -> MinuteOfHour {
        self.minute
    }

    /// Returns the second of minute, `0..=59`.
    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the millisecond of second, `0..=999`.
    #[inline]
    pub fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Returns `true` if this time is strictly later in the day than `other`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns `true` if this time is strictly earlier in the day than `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{:02}.{:03}", self.hour, self.minute, self.second, self.millisecond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, DayOfWeek::Sunday)]
    #[case(2, DayOfWeek::Monday)]
    #[case(7, DayOfWeek::Saturday)]
    fn day_of_week_from_code(#[case] code: u8, #[case] expected: DayOfWeek) {
        let dow = DayOfWeek::from_code(code).unwrap();
        assert_eq!(dow, expected);
        assert_eq!(dow.code(), code);
    }

    #[rstest]
    #[case(0)]
    #[case(8)]
    #[case(255)]
    fn day_of_week_invalid_code(#[case] code: u8) {
        assert!(matches!(DayOfWeek::from_code(code), Err(SpecError::OutOfRange(_))));
    }

    #[rstest]
    #[case(Weekday::Sun, DayOfWeek::Sunday)]
    #[case(Weekday::Mon, DayOfWeek::Monday)]
    #[case(Weekday::Sat, DayOfWeek::Saturday)]
    fn day_of_week_from_chrono(#[case] weekday: Weekday, #[case] expected: DayOfWeek) {
        assert_eq!(DayOfWeek::from(weekday), expected);
    }

    #[test]
    fn hour_of_day_whole_valid_range() {
        for value in 0..=23u8 {
            assert_eq!(HourOfDay::new(value).unwrap().value(), value);
        }
    }

    #[rstest]
    #[case(24)]
    #[case(99)]
    fn hour_of_day_out_of_range(#[case] value: u8) {
        assert!(matches!(HourOfDay::new(value), Err(SpecError::OutOfRange(_))));
    }

    #[rstest]
    #[case(10, "PM", 22)]
    #[case(3, "am", 3)]
    #[case(12, "AM", 0)]
    #[case(12, "pm", 12)]
    #[case(1, "Am", 1)]
    #[case(11, "pM", 23)]
    fn hour_of_day_from_12hr_token(#[case] hour: u8, #[case] meridian: &str, #[case] expected: u8) {
        assert_eq!(
            HourOfDay::from_12hr_token(hour, meridian).unwrap(),
            HourOfDay::new(expected).unwrap()
        );
    }

    #[rstest]
    #[case(0, "AM")]
    #[case(13, "AM")]
    #[case(13, "PM")]
    fn hour_of_day_from_12hr_out_of_range(#[case] hour: u8, #[case] meridian: &str) {
        assert!(matches!(
            HourOfDay::from_12hr_token(hour, meridian),
            Err(SpecError::OutOfRange(_))
        ));
    }

    #[rstest]
    #[case("FD")]
    #[case("")]
    #[case("A.M.")]
    fn hour_of_day_from_12hr_bad_meridian(#[case] meridian: &str) {
        assert!(matches!(
            HourOfDay::from_12hr_token(5, meridian),
            Err(SpecError::InvalidFormat(_))
        ));
    }

    #[test]
    fn hour_of_day_strict_ordering() {
        let earlier = HourOfDay::new(6).unwrap();
        let later = HourOfDay::new(8).unwrap();
        let same = HourOfDay::new(8).unwrap();

        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
        assert!(!later.is_after(&same));

        assert!(earlier.is_before(&later));
        assert!(!later.is_before(&earlier));
        assert!(!later.is_before(&same));
    }

    #[test]
    fn minute_of_hour_whole_valid_range() {
        for value in 0..=59u8 {
            assert_eq!(MinuteOfHour::new(value).unwrap().value(), value);
        }
    }

    #[rstest]
    #[case(60)]
    #[case(255)]
    fn minute_of_hour_out_of_range(#[case] value: u8) {
        assert!(matches!(MinuteOfHour::new(value), Err(SpecError::OutOfRange(_))));
    }

    #[test]
    fn minute_of_hour_strict_ordering() {
        let earlier = MinuteOfHour::new(15).unwrap();
        let later = MinuteOfHour::new(45).unwrap();

        assert!(later.is_after(&earlier));
        assert!(earlier.is_before(&later));
        assert!(!later.is_after(&later));
        assert!(!later.is_before(&later));
    }

    #[rstest]
    #[case(1)]
    #[case(15)]
    #[case(31)]
    fn day_of_month_valid(#[case] value: u8) {
        assert_eq!(DayOfMonth::new(value).unwrap().value(), value);
    }

    #[rstest]
    #[case(0)]
    #[case(32)]
    fn day_of_month_out_of_range(#[case] value: u8) {
        assert!(matches!(DayOfMonth::new(value), Err(SpecError::OutOfRange(_))));
    }

    #[test]
    fn day_of_month_strict_ordering() {
        let first = DayOfMonth::new(1).unwrap();
        let last = DayOfMonth::new(31).unwrap();

        assert!(last.is_after(&first));
        assert!(first.is_before(&last));
        assert!(!first.is_after(&first));
        assert!(!first.is_before(&first));
    }

    #[rstest]
    #[case(0, 0, 0, 0, "00:00:00.000")]
    #[case(23, 59, 59, 999, "23:59:59.999")]
    #[case(9, 5, 30, 7, "09:05:30.007")]
    fn time_of_day_valid_and_display(
        #[case] h: u8,
        #[case] m: u8,
        #[case] s: u8,
        #[case] ms: u16,
        #[case] expected: &str,
    ) {
        let time = TimeOfDay::from_hms_milli(h, m, s, ms).unwrap();
        assert_eq!(time.hour().value(), h);
        assert_eq!(time.minute().value(), m);
        assert_eq!(time.second(), s);
        assert_eq!(time.millisecond(), ms);
        assert_eq!(time.to_string(), expected);
    }

    #[rstest]
    #[case(24, 0, 0, 0)]
    #[case(0, 60, 0, 0)]
    #[case(0, 0, 60, 0)]
    #[case(0, 0, 0, 1000)]
    fn time_of_day_out_of_range(#[case] h: u8, #[case] m: u8, #[case] s: u8, #[case] ms: u16) {
        assert!(matches!(
            TimeOfDay::from_hms_milli(h, m, s, ms),
            Err(SpecError::OutOfRange(_))
        ));
    }

    #[test]
    fn time_of_day_ordering() {
        let morning = TimeOfDay::from_hms_milli(8, 30, 0, 0).unwrap();
        let evening = TimeOfDay::from_hms_milli(20, 30, 0, 0).unwrap();
        let millis_apart = TimeOfDay::from_hms_milli(8, 30, 0, 1).unwrap();

        assert!(evening.is_after(&morning));
        assert!(morning.is_before(&evening));
        assert!(millis_apart.is_after(&morning));
        assert!(!morning.is_after(&morning));
    }
}
