//! Pluggable time source and the clock context deriving "now" and "today".
use crate::{Result, SpecError};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::{
    fmt::{self, Debug},
    sync::{Arc, RwLock},
};

/// Provider of the current instant.
///
/// Abstracts the system clock away so that tests can inject a deterministic
/// source, see [`FixedTimeSource`].
pub trait TimeSource: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Time source backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time source frozen at a single instant, for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
}

impl FixedTimeSource {
    /// Returns the source which always reports the provided instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Clock context: a time source bundled with an optional default timezone.
///
/// Construct and pass an explicit instance wherever "now" or "today" is
/// needed; the process-wide default ([`set`]/[`now`]/[`today`]) exists only
/// for ergonomic top-level call sites.
#[derive(Clone)]
pub struct Clock {
    source: Arc<dyn TimeSource>,
    default_time_zone: Option<Tz>,
}

impl Clock {
    /// Returns the clock backed by the system wall clock, with no default timezone.
    pub fn system() -> Self {
        Self::new(SystemTimeSource)
    }

    /// Returns the clock backed by the provided time source, with no default timezone.
    pub fn new(source: impl TimeSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            default_time_zone: None,
        }
    }

    /// Returns the clock frozen at the provided instant, with no default timezone.
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::new(FixedTimeSource::new(instant))
    }

    /// Returns this clock with the provided default timezone configured.
    pub fn with_default_time_zone(mut self, zone: Tz) -> Self {
        self.default_time_zone = Some(zone);
        self
    }

    /// Returns the default timezone, if one was configured.
    pub fn default_time_zone(&self) -> Option<Tz> {
        // There is no reasonable automatic default.
        self.default_time_zone
    }

    /// Returns the current instant reported by this clock's time source.
    pub fn now(&self) -> DateTime<Utc> {
        self.source.now()
    }

    /// Returns today's date under the configured default timezone.
    ///
    /// Returns [`SpecError::UnconfiguredClock`] if no default timezone was
    /// configured: there is no silent fallback to the host's environment.
    pub fn today(&self) -> Result<NaiveDate> {
        let zone = self.default_time_zone.ok_or_else(|| {
            SpecError::UnconfiguredClock("today cannot be computed without a default timezone".into())
        })?;
        Ok(self.today_in(&zone))
    }

    /// Returns today's date under the provided timezone.
    pub fn today_in<Tz: TimeZone>(&self, zone: &Tz) -> NaiveDate {
        self.now().with_timezone(zone).date_naive()
    }
}

impl Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock")
            .field("default_time_zone", &self.default_time_zone)
            .finish_non_exhaustive()
    }
}

/// Process-wide default clock, uninitialized at start.
static DEFAULT_CLOCK: RwLock<Option<Clock>> = RwLock::new(None);

/// Replaces the process-wide default clock.
///
/// This is a configuration-time operation: racing it against concurrent
/// [`now`]/[`today`] readers is the host's responsibility to avoid.
pub fn set(clock: Clock) {
    let mut guard = DEFAULT_CLOCK.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(clock);
}

/// Resets the process-wide default clock to the uninitialized state,
/// primarily for test isolation.
pub fn reset() {
    let mut guard = DEFAULT_CLOCK.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}

/// Returns the current instant from the process-wide default clock,
/// lazily falling back to the system wall clock if none was set.
pub fn now() -> DateTime<Utc> {
    let guard = DEFAULT_CLOCK.read().unwrap_or_else(|e| e.into_inner());
    match guard.as_ref() {
        Some(clock) => clock.now(),
        None => Utc::now(),
    }
}

/// Returns today's date from the process-wide default clock.
///
/// Returns [`SpecError::UnconfiguredClock`] if no default clock was set or
/// the one set carries no default timezone: unlike [`now`], there is no
/// system fallback because a date is meaningless without a timezone.
pub fn today() -> Result<NaiveDate> {
    let guard = DEFAULT_CLOCK.read().unwrap_or_else(|e| e.into_inner());
    guard
        .as_ref()
        .ok_or_else(|| SpecError::UnconfiguredClock("no default clock was set".into()))?
        .today()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::{America, Asia};

    fn late_utc_evening() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 17, 23, 30, 0).unwrap()
    }

    #[test]
    fn fixed_clock_reports_injected_instant() {
        let clock = Clock::fixed(late_utc_evening());
        assert_eq!(clock.now(), late_utc_evening());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn today_requires_default_time_zone() {
        let clock = Clock::fixed(late_utc_evening());
        assert!(matches!(clock.today(), Err(SpecError::UnconfiguredClock(_))));
    }

    #[test]
    fn today_under_configured_time_zone() {
        let clock = Clock::fixed(late_utc_evening()).with_default_time_zone(Asia::Tokyo);

        // 23:30 UTC is already the next morning in Tokyo.
        assert_eq!(clock.today().unwrap(), NaiveDate::from_ymd_opt(2024, 11, 18).unwrap());
        assert_eq!(clock.default_time_zone(), Some(Asia::Tokyo));
    }

    #[test]
    fn today_in_explicit_time_zone() {
        let clock = Clock::fixed(late_utc_evening());

        assert_eq!(
            clock.today_in(&America::New_York),
            NaiveDate::from_ymd_opt(2024, 11, 17).unwrap()
        );
        assert_eq!(clock.today_in(&Utc), NaiveDate::from_ymd_opt(2024, 11, 17).unwrap());
        assert_eq!(clock.today_in(&Asia::Tokyo), NaiveDate::from_ymd_opt(2024, 11, 18).unwrap());
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = Clock::system();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    // The process-wide default is shared mutable state, so its whole
    // lifecycle is exercised within a single test function: the test harness
    // runs separate tests concurrently.
    #[test]
    fn process_wide_default_lifecycle() {
        reset();

        // Unset clock: "now" falls back to the system, "today" fails fast.
        let _ = now();
        assert!(matches!(today(), Err(SpecError::UnconfiguredClock(_))));

        // Set, but without a default timezone: "today" still fails.
        set(Clock::fixed(late_utc_evening()));
        assert_eq!(now(), late_utc_evening());
        assert!(matches!(today(), Err(SpecError::UnconfiguredClock(_))));

        // Fully configured.
        set(Clock::fixed(late_utc_evening()).with_default_time_zone(Asia::Tokyo));
        assert_eq!(today().unwrap(), NaiveDate::from_ymd_opt(2024, 11, 18).unwrap());

        // Reset restores the uninitialized state.
        reset();
        assert!(matches!(today(), Err(SpecError::UnconfiguredClock(_))));
    }
}
