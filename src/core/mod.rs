//! Core abstractions for whatidid.
//!
//! This module provides the clock seam and calendar arithmetic shared by the
//! analysis features.

mod clock;
pub mod weekday;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{parse_instant, Clock, FixedClock, SystemClock};
pub use weekday::{
    days_since_last, days_until_next, parse_weekday, weekday_from_number, weekday_number,
    SameWeekdayPolicy,
};
