//! Weekday numbering and occurrence arithmetic.
//!
//! Weekdays are numbered 1..=7 starting from Sunday, matching the Gregorian
//! calendar convention used throughout date resolution.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Sunday-based weekday number (Sunday = 1, Saturday = 7).
#[must_use]
pub const fn weekday_number(day: Weekday) -> u32 {
    day.num_days_from_sunday() + 1
}

/// Inverse of [`weekday_number`]. Returns `None` outside 1..=7.
#[must_use]
pub const fn weekday_from_number(number: u32) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Sun),
        2 => Some(Weekday::Mon),
        3 => Some(Weekday::Tue),
        4 => Some(Weekday::Wed),
        5 => Some(Weekday::Thu),
        6 => Some(Weekday::Fri),
        7 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Parse an English weekday name or common abbreviation (case-insensitive).
#[must_use]
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days from `from` forward to the next `target`: `(target - from + 7) mod 7`.
///
/// Zero when the two are the same day; see [`SameWeekdayPolicy`].
#[must_use]
pub const fn days_until_next(target: u32, from: u32) -> u32 {
    (target + 7 - from) % 7
}

/// Days from `from` back to the previous `target`: `(from - target + 7) mod 7`.
///
/// Zero when the two are the same day; see [`SameWeekdayPolicy`].
#[must_use]
pub const fn days_since_last(target: u32, from: u32) -> u32 {
    (from + 7 - target) % 7
}

/// What "last friday" / "next friday" means when today is Friday.
///
/// The modulo arithmetic yields a distance of zero in that case. This policy
/// decides whether zero stays zero (the phrase names today) or becomes a full
/// week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameWeekdayPolicy {
    /// Shift by seven days, so "last" is strictly past and "next" strictly future.
    #[default]
    WeekOffset,
    /// Keep the zero distance, so the phrase resolves to today.
    Today,
}

impl SameWeekdayPolicy {
    /// Apply the policy to a raw distance produced by the modulo helpers.
    #[must_use]
    pub const fn resolve(self, days: u32) -> u32 {
        match (self, days) {
            (Self::WeekOffset, 0) => 7,
            _ => days,
        }
    }
}
