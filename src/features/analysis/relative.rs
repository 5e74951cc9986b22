//! Relative date vocabulary.
//!
//! Scans whitespace-separated words for `today`, `yesterday`, `tomorrow`,
//! `weekend`, `last <weekday>` and `next <weekday>`. Every trigger overwrites
//! the previous one, so the last trigger in the text decides the date.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};
use tracing::trace;

use super::dates::DateOptions;
use crate::core::{days_since_last, days_until_next, parse_weekday, weekday_number};

/// Words that start a relative date computation.
pub const TRIGGER_WORDS: [&str; 6] = ["today", "yesterday", "tomorrow", "weekend", "last", "next"];

/// A relative phrase and the timestamp it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeMatch {
    /// Resolved timestamp.
    pub at: NaiveDateTime,
    /// The phrase that produced it, lowercased (`"last monday"`).
    pub phrase: String,
}

/// Resolve relative date phrases in `text` against `now`.
#[must_use]
pub fn detect_relative(text: &str, now: NaiveDateTime, options: &DateOptions) -> Option<RelativeMatch> {
    let words: Vec<String> = text.split_whitespace().map(normalize_word).collect();
    let mut found = None;

    for (i, word) in words.iter().enumerate() {
        let following = words.get(i + 1).map(String::as_str);

        let resolved = match word.as_str() {
            "today" => Some((now, word.clone())),
            "yesterday" => now
                .checked_sub_signed(Duration::days(1))
                .map(|at| (at, word.clone())),
            "tomorrow" => now
                .checked_add_signed(Duration::days(1))
                .map(|at| (at, word.clone())),
            "weekend" => next_weekend_start(now, options.weekend_start).map(|at| (at, word.clone())),
            "last" | "next" => following.and_then(|next_word| {
                let target = parse_weekday(next_word)?;
                let at = if word == "last" {
                    last_occurrence(now, target, options)
                } else {
                    next_occurrence(now, target, options)
                }?;
                Some((at, format!("{word} {next_word}")))
            }),
            _ => None,
        };

        if let Some((at, phrase)) = resolved {
            trace!(%phrase, %at, "relative trigger");
            found = Some(RelativeMatch { at, phrase });
        }
    }

    found
}

/// Most recent `target` weekday before `now`, keeping the time of day.
#[must_use]
pub fn last_occurrence(now: NaiveDateTime, target: Weekday, options: &DateOptions) -> Option<NaiveDateTime> {
    let days = days_since_last(weekday_number(target), weekday_number(now.weekday()));
    let days = options.same_weekday.resolve(days);
    now.checked_sub_signed(Duration::days(i64::from(days)))
}

/// Nearest upcoming `target` weekday after `now`, keeping the time of day.
#[must_use]
pub fn next_occurrence(now: NaiveDateTime, target: Weekday, options: &DateOptions) -> Option<NaiveDateTime> {
    let days = days_until_next(weekday_number(target), weekday_number(now.weekday()));
    let days = options.same_weekday.resolve(days);
    now.checked_add_signed(Duration::days(i64::from(days)))
}

/// Midnight at the start of the first weekend that begins strictly after `now`.
///
/// On a weekend day this is the following weekend.
#[must_use]
pub fn next_weekend_start(now: NaiveDateTime, weekend_start: Weekday) -> Option<NaiveDateTime> {
    let days = match days_until_next(weekday_number(weekend_start), weekday_number(now.weekday())) {
        0 => 7,
        d => d,
    };
    now.date()
        .checked_add_signed(Duration::days(i64::from(days)))
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Lowercase a word and trim surrounding punctuation and possessives.
fn normalize_word(word: &str) -> String {
    let lower = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
        .replace('’', "'");
    lower.strip_suffix("'s").map_or_else(|| lower.clone(), str::to_string)
}
