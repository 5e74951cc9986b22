//! Two-phase date extraction.
//!
//! Absolute phrases ("dec 15", "2024-12-25") are tried first and the first
//! one found wins outright. Only when none exist is the relative vocabulary
//! consulted, where the last trigger wins.

use chrono::{NaiveDateTime, Weekday};
use tracing::debug;

use super::absolute::detect_absolute;
use super::relative::detect_relative;
use crate::core::SameWeekdayPolicy;

/// Calendar rules for resolving relative phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOptions {
    /// Meaning of "last/next <weekday>" when that weekday is today.
    pub same_weekday: SameWeekdayPolicy,
    /// First day of the weekend.
    pub weekend_start: Weekday,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            same_weekday: SameWeekdayPolicy::default(),
            weekend_start: Weekday::Sat,
        }
    }
}

/// Which phase produced a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    /// A calendar phrase such as `dec 15`.
    Absolute,
    /// A relative phrase such as `last friday`.
    Relative,
}

/// A date found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedDate {
    pub at: NaiveDateTime,
    pub source: DateSource,
    /// The phrase the date came from.
    pub phrase: String,
}

/// Extract the referenced date from `text`, if any.
#[must_use]
pub fn extract_date(text: &str, now: NaiveDateTime, options: &DateOptions) -> Option<DetectedDate> {
    if let Some(found) = detect_absolute(text, now, options) {
        debug!(phrase = %found.phrase, at = %found.at, "absolute date");
        return Some(DetectedDate {
            at: found.at,
            source: DateSource::Absolute,
            phrase: found.phrase,
        });
    }

    let found = detect_relative(text, now, options)?;
    debug!(phrase = %found.phrase, at = %found.at, "relative date");
    Some(DetectedDate {
        at: found.at,
        source: DateSource::Relative,
        phrase: found.phrase,
    })
}
