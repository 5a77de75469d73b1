//! Calendar and clock value types with a composable recurring date specification engine.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - provide range-checked clock and calendar value types (hour, minute, day of week,
//!   day of month) and a timezone-aware instant within a day;
//! - express recurring date rules ("the 3rd Monday of every month") as composable,
//!   immutable specifications and evaluate them over the date axis.
//!
//! Calendar dates and timezones come from [chrono](https://crates.io/crates/chrono)
//! and [chrono-tz](https://crates.io/crates/chrono-tz).
//!
//! _This is not a scheduler or a cron runner._ It computes which dates satisfy a rule;
//! it never fires timers or executes callbacks.
//!
//! ## Date specifications
//!
//! A [`DateSpecification`] is a pure predicate over [`chrono::NaiveDate`]s. The
//! monthly variants ([`MonthlyDateSpecification`]) additionally compute their single
//! qualifying date per month analytically; everything else, including the `AND`/`OR`/
//! `NOT` composites, is searched with an explicitly bounded day-by-day scan, so an
//! unsatisfiable rule can never spin forever.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use date_spec::{CalendarMonth, DateSpecification, DayOfWeek, MonthlyDateSpecification, Result};
//!
//! fn third_monday() -> Result<()> {
//!     // Analytic form: one date per month, no scanning.
//!     let spec = MonthlyDateSpecification::floating(DayOfWeek::Monday, 3)?;
//!     let date = spec.date_in(CalendarMonth::new(2024, 11)?)?;
//!     assert_eq!(date, NaiveDate::from_ymd_opt(2024, 11, 18).unwrap());
//!
//!     // Predicate form, composable with other specifications.
//!     let spec = DateSpecification::from(spec);
//!     assert!(spec.is_satisfied_by(date));
//!
//!     // Bounded search over the date axis.
//!     let weekend = DateSpecification::day_of_week_set([DayOfWeek::Saturday, DayOfWeek::Sunday]);
//!     let next = weekend
//!         .not()
//!         .first_occurrence_since(NaiveDate::from_ymd_opt(2024, 11, 16).unwrap(), 7)?;
//!     assert_eq!(next, NaiveDate::from_ymd_opt(2024, 11, 18));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Clock
//!
//! A [`Clock`] bundles a pluggable [`TimeSource`] with an optional default timezone,
//! so "now" and "today" are explicit, injectable dependencies instead of hidden
//! environment reads. Asking an unconfigured clock for "today" fails fast rather than
//! silently using the host's timezone.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use date_spec::{Clock, Result};
//!
//! fn today_in_tokyo() -> Result<()> {
//!     let instant = Utc.with_ymd_and_hms(2024, 11, 17, 23, 30, 0).unwrap();
//!     let clock = Clock::fixed(instant).with_default_time_zone(chrono_tz::Asia::Tokyo);
//!
//!     // 23:30 UTC is already next morning in Tokyo.
//!     assert_eq!(clock.today()?.to_string(), "2024-11-18");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html)
//!   and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait
//!   implementations for the value types and specifications.

/// Pluggable time source and the clock context.
pub mod clock;
/// Crate specific Error implementation.
pub mod error;
mod month;
/// Date specification variants, combinators and occurrence search.
pub mod spec;
mod time_point;
mod unit;

// Re-export of public entities.
pub use clock::{Clock, FixedTimeSource, SystemTimeSource, TimeSource};
pub use error::SpecError;
pub use month::CalendarMonth;
pub use spec::{DateIterator, DateSpecification, MonthlyDateSpecification};
pub use time_point::TimePointOfDay;
pub use unit::{DayOfMonth, DayOfWeek, HourOfDay, Meridian, MinuteOfHour, TimeOfDay};

/// Convenient alias for `Result`.
pub type Result<T, E = SpecError> = std::result::Result<T, E>;
