//! Source of the current instant.
//!
//! Relative phrases ("yesterday", "next friday") resolve against whatever the
//! clock reports, so tests and the `--now` flag inject a [`FixedClock`].

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Provides "now" as local wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Freeze the clock at `date` and `time`.
    #[must_use]
    pub const fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self(NaiveDateTime::new(date, time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Parse a user-supplied instant for overriding the clock.
///
/// Accepts `2024-12-15T09:30`, `2024-12-15 09:30:00` and a bare `2024-12-15`
/// (midnight).
#[must_use]
pub fn parse_instant(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|d| NaiveDateTime::new(d, NaiveTime::MIN))
}
