//! Absolute date detection.
//!
//! Finds calendar-style date phrases anywhere in free text:
//! - `2024-12-25`, `2024-12-25T15:00`
//! - `12/25`, `12/25/2024`
//! - `dec 15`, `December 15th, 2024 at 3pm`
//! - `15 december`, `3rd of May 2024`
//! - `friday at 3pm`, `last friday at 3pm`, `next sat at 9:00`
//! - `tomorrow at 9am`, `yesterday 18:30`
//!
//! The leftmost phrase that names a real calendar date wins.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::dates::DateOptions;
use super::relative::{last_occurrence, next_occurrence};
use crate::core::{days_until_next, parse_weekday, weekday_number};

const MONTH: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

const WEEKDAY: &str = r"monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun";

// "sat" and "sun" are also ordinary words, so without "last"/"next" they need a period.
const TIMED_WEEKDAY: &str = r"(?:monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sunday)\b\.?|(?:sat|sun)\.";

const TIME: &str = r"\d{1,2}(?::\d{2})?\s*(?:am|pm)|\d{1,2}:\d{2}";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid date regex {pattern}: {e}"))
}

fn trailing_time() -> String {
    format!(r"(?:,?\s+(?:at\s+|@\s*)?(?P<time>{TIME}))?\b")
}

static ISO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?P<y>\d{{4}})-(?P<m>\d{{1,2}})-(?P<d>\d{{1,2}})(?:(?:T|,?\s+(?:at\s+|@\s*)?)(?P<time>{TIME}))?\b"
    ))
});

static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?P<m>\d{{1,2}})/(?P<d>\d{{1,2}})(?:/(?P<y>\d{{4}}|\d{{2}}))?\b{}",
        trailing_time()
    ))
});

static MONTH_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?P<mon>{MONTH})\b\.?\s+(?P<d>\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(?P<y>\d{{4}})\b)?{}",
        trailing_time()
    ))
});

static DAY_MONTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?P<d>\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?(?P<mon>{MONTH})\b\.?(?:,?\s+(?P<y>\d{{4}})\b)?{}",
        trailing_time()
    ))
});

static WEEKDAY_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?:(?P<dir>last|next)\s+(?P<dwd>{WEEKDAY})\b\.?|(?P<wd>{TIMED_WEEKDAY})),?\s+(?:at\s+|@\s*)?(?P<time>{TIME})\b"
    ))
});

static DAY_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?P<rel>today|tomorrow|yesterday)\b,?\s+(?:at\s+|@\s*)?(?P<time>{TIME})\b"
    ))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Iso,
    Numeric,
    MonthDay,
    DayMonth,
    WeekdayTime,
    DayTime,
}

/// An absolute date phrase found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteMatch {
    /// Resolved timestamp (midnight when the phrase has no time).
    pub at: NaiveDateTime,
    /// The matched phrase as written.
    pub phrase: String,
    /// Byte offset of the phrase in the input.
    pub start: usize,
}

/// Find the first absolute date phrase in `text`.
///
/// Phrases that look like dates but do not exist on the calendar (`13/45`,
/// `feb 30`) are skipped in favour of the next candidate.
#[must_use]
pub fn detect_absolute(text: &str, now: NaiveDateTime, options: &DateOptions) -> Option<AbsoluteMatch> {
    let patterns: [(&Regex, Shape); 6] = [
        (&*ISO_PATTERN, Shape::Iso),
        (&*NUMERIC_PATTERN, Shape::Numeric),
        (&*MONTH_DAY_PATTERN, Shape::MonthDay),
        (&*DAY_MONTH_PATTERN, Shape::DayMonth),
        (&*WEEKDAY_TIME_PATTERN, Shape::WeekdayTime),
        (&*DAY_TIME_PATTERN, Shape::DayTime),
    ];

    let mut candidates: Vec<(Captures<'_>, Shape)> = patterns
        .iter()
        .flat_map(|(re, shape)| re.captures_iter(text).map(move |caps| (caps, *shape)))
        .collect();

    // Leftmost first; at the same offset prefer the longer phrase.
    candidates.sort_by_key(|(caps, _)| {
        caps.get(0)
            .map_or((usize::MAX, 0), |m| (m.start(), usize::MAX - m.len()))
    });

    candidates.iter().find_map(|(caps, shape)| {
        let whole = caps.get(0)?;
        let at = resolve(caps, *shape, now, options)?;
        Some(AbsoluteMatch {
            at,
            phrase: whole.as_str().to_string(),
            start: whole.start(),
        })
    })
}

fn resolve(
    caps: &Captures<'_>,
    shape: Shape,
    now: NaiveDateTime,
    options: &DateOptions,
) -> Option<NaiveDateTime> {
    let time = match caps.name("time") {
        Some(t) => parse_time(t.as_str())?,
        None => NaiveTime::MIN,
    };

    if shape == Shape::DayTime {
        let offset = match caps.name("rel")?.as_str().to_lowercase().as_str() {
            "yesterday" => -1,
            "tomorrow" => 1,
            _ => 0,
        };
        return now
            .date()
            .checked_add_signed(Duration::days(offset))
            .map(|date| date.and_time(time));
    }

    if shape == Shape::WeekdayTime {
        if let (Some(dir), Some(name)) = (caps.name("dir"), caps.name("dwd")) {
            let target = parse_weekday(name.as_str())?;
            let day = if dir.as_str().eq_ignore_ascii_case("last") {
                last_occurrence(now, target, options)?
            } else {
                next_occurrence(now, target, options)?
            };
            return Some(day.date().and_time(time));
        }

        let target = parse_weekday(caps.name("wd")?.as_str().trim_end_matches('.'))?;
        let today = now.date();
        let days = days_until_next(weekday_number(target), weekday_number(today.weekday()));
        let candidate = today
            .checked_add_signed(Duration::days(i64::from(days)))?
            .and_time(time);
        return if candidate > now {
            Some(candidate)
        } else {
            candidate.checked_add_signed(Duration::days(7))
        };
    }

    let month = match caps.name("mon") {
        Some(name) => parse_month_name(name.as_str())?,
        None => caps.name("m")?.as_str().parse().ok()?,
    };
    let day: u32 = caps.name("d")?.as_str().parse().ok()?;
    let year = match caps.name("y") {
        Some(y) => expand_year(y.as_str().parse().ok()?),
        None => now.year(),
    };

    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(time))
}

const fn expand_year(year: i32) -> i32 {
    if year < 100 {
        2000 + year
    } else {
        year
    }
}

/// Parse month name to number.
fn parse_month_name(input: &str) -> Option<u32> {
    let input = input.to_lowercase();
    let month = match input.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parse a clock time: `15:00`, `3pm`, `3:30 pm`, `12am`.
fn parse_time(input: &str) -> Option<NaiveTime> {
    let input: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let (time_str, meridiem) = if let Some(rest) = input.strip_suffix("pm") {
        (rest, Some(true))
    } else if let Some(rest) = input.strip_suffix("am") {
        (rest, Some(false))
    } else {
        (input.as_str(), None)
    };

    let (hour, minute) = match time_str.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None => (time_str.parse::<u32>().ok()?, 0),
    };

    let hour = match meridiem {
        Some(_) if hour == 0 || hour > 12 => return None,
        Some(true) if hour < 12 => hour + 12,
        Some(false) if hour == 12 => 0,
        _ => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SameWeekdayPolicy;

    // Wednesday 2024-03-13 10:30
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 13)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn detect(text: &str) -> Option<NaiveDateTime> {
        detect_absolute(text, now(), &DateOptions::default()).map(|m| m.at)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(detect("event 2024-12-25"), Some(at(2024, 12, 25, 0, 0)));
        assert_eq!(detect("deploy 2024-12-25T15:30"), Some(at(2024, 12, 25, 15, 30)));
        assert_eq!(detect("deploy 2024-12-25 at 3pm"), Some(at(2024, 12, 25, 15, 0)));
    }

    #[test]
    fn test_numeric_date() {
        assert_eq!(detect("dentist 12/5"), Some(at(2024, 12, 5, 0, 0)));
        assert_eq!(detect("dentist 12/5/2023"), Some(at(2023, 12, 5, 0, 0)));
        assert_eq!(detect("dentist 12/5/23 at 9am"), Some(at(2023, 12, 5, 9, 0)));
    }

    #[test]
    fn test_month_day() {
        assert_eq!(detect("birthday dec 15"), Some(at(2024, 12, 15, 0, 0)));
        assert_eq!(
            detect("Gym on December 15th, 2023 at 6:45 pm"),
            Some(at(2023, 12, 15, 18, 45))
        );
        assert_eq!(detect("Sept. 3 hike"), Some(at(2024, 9, 3, 0, 0)));
    }

    #[test]
    fn test_day_month() {
        assert_eq!(detect("yoga 3rd of May"), Some(at(2024, 5, 3, 0, 0)));
        assert_eq!(detect("run 15 March 2022 07:15"), Some(at(2022, 3, 15, 7, 15)));
    }

    #[test]
    fn test_weekday_with_time_is_upcoming() {
        // Friday after Wednesday 2024-03-13
        assert_eq!(detect("call friday at 3pm"), Some(at(2024, 3, 15, 15, 0)));
        // Wednesday later today
        assert_eq!(detect("standup wed 11:00"), Some(at(2024, 3, 13, 11, 0)));
        // Wednesday earlier today has passed, so next week
        assert_eq!(detect("standup wednesday at 9am"), Some(at(2024, 3, 20, 9, 0)));
    }

    #[test]
    fn test_last_weekday_with_time_is_in_the_past() {
        let found = detect_absolute("last friday at 3pm I went for a run", now(), &DateOptions::default())
            .unwrap();
        assert_eq!(found.at, at(2024, 3, 8, 15, 0));
        assert_eq!(found.phrase, "last friday at 3pm");
        assert!(found.at < now());

        assert_eq!(detect("Last Mon 9:15 standup"), Some(at(2024, 3, 11, 9, 15)));
    }

    #[test]
    fn test_next_weekday_with_time_follows_same_weekday_policy() {
        let friday = at(2024, 3, 15, 10, 0);
        let week_offset = detect_absolute("next friday at 3pm yoga", friday, &DateOptions::default());
        assert_eq!(week_offset.map(|m| m.at), Some(at(2024, 3, 22, 15, 0)));

        let same_day = DateOptions {
            same_weekday: SameWeekdayPolicy::Today,
            ..DateOptions::default()
        };
        let today = detect_absolute("next friday at 3pm yoga", friday, &same_day);
        assert_eq!(today.map(|m| m.at), Some(at(2024, 3, 15, 15, 0)));

        // "last" on the same weekday goes a week back by default
        assert_eq!(
            detect_absolute("last friday at 8am", friday, &DateOptions::default()).map(|m| m.at),
            Some(at(2024, 3, 8, 8, 0))
        );
    }

    #[test]
    fn test_sat_and_sun_as_words_are_not_weekdays() {
        assert_eq!(detect("I sat at 5pm and read"), None);
        assert_eq!(detect("sun at 5pm on the porch"), None);
        assert_eq!(detect("hike sat. at 8am"), Some(at(2024, 3, 16, 8, 0)));
        assert_eq!(detect("hike saturday 8am"), Some(at(2024, 3, 16, 8, 0)));
        assert_eq!(detect("next sat at 8am"), Some(at(2024, 3, 16, 8, 0)));
    }

    #[test]
    fn test_day_word_with_time() {
        assert_eq!(detect("gym tomorrow at 9am"), Some(at(2024, 3, 14, 9, 0)));
        assert_eq!(detect("yesterday 18:30 yoga"), Some(at(2024, 3, 12, 18, 30)));
        assert_eq!(detect("Today @ 7pm dinner"), Some(at(2024, 3, 13, 19, 0)));
        // Without a time these stay relative
        assert_eq!(detect("gym tomorrow"), None);
    }

    #[test]
    fn test_bare_weekday_is_not_absolute() {
        assert_eq!(detect("meeting friday"), None);
        assert_eq!(detect("last monday I worked"), None);
    }

    #[test]
    fn test_leftmost_phrase_wins() {
        let found = detect_absolute("moved 2024-01-02 from dec 15", now(), &DateOptions::default()).unwrap();
        assert_eq!(found.at, at(2024, 1, 2, 0, 0));
        assert_eq!(found.phrase, "2024-01-02");
        assert_eq!(found.start, 6);

        assert_eq!(detect("dec 15 not 2024-01-02"), Some(at(2024, 12, 15, 0, 0)));
    }

    #[test]
    fn test_impossible_dates_are_skipped() {
        assert_eq!(detect("score 13/45"), None);
        assert_eq!(detect("feb 30 then mar 1"), Some(at(2024, 3, 1, 0, 0)));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(detect(""), None);
        assert_eq!(detect("read a book"), None);
        assert_eq!(detect("ran 5km in 25 minutes"), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("3pm"), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(parse_time("3:30 PM"), NaiveTime::from_hms_opt(15, 30, 0));
        assert_eq!(parse_time("12am"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time("12pm"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_time("15:00"), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(parse_time("13pm"), None);
        assert_eq!(parse_time("25:00"), None);
    }

    #[test]
    fn test_parse_month_name() {
        assert_eq!(parse_month_name("January"), Some(1));
        assert_eq!(parse_month_name("sept"), Some(9));
        assert_eq!(parse_month_name("de"), None);
    }
}
