//! The analysis entry point.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::ActivityCategory;
use super::classifier::KeywordMap;
use super::dates::{extract_date, DateOptions, DetectedDate};
use super::lemma::lemmatize_text;
use crate::core::{Clock, FixedClock, SystemClock};

/// What was inferred from one activity description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The input, verbatim.
    pub title: String,
    /// Inferred category, if any keyword matched.
    pub category: Option<ActivityCategory>,
    /// Referenced date, if any phrase was recognized.
    pub date: Option<NaiveDateTime>,
}

impl AnalysisResult {
    /// The category, or `default` when none was inferred.
    #[must_use]
    pub fn category_or(&self, default: ActivityCategory) -> ActivityCategory {
        self.category.unwrap_or(default)
    }
}

/// An [`AnalysisResult`] together with the intermediate values behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedAnalysis {
    pub result: AnalysisResult,
    /// Lemma tokens used for classification.
    pub tokens: Vec<String>,
    /// The date phrase and the phase that found it.
    pub date: Option<DetectedDate>,
    /// The instant relative phrases were resolved against.
    pub now: NaiveDateTime,
}

/// Infers category and date from free-text activity descriptions.
///
/// Holds no mutable state; a shared `Analyzer` can be used from many threads
/// at once when its clock allows it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use whatidid::core::FixedClock;
/// use whatidid::features::analysis::{ActivityCategory, Analyzer};
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let analyzer = Analyzer::with_clock(FixedClock(now));
///
/// let result = analyzer.analyze("I went to the gym yesterday");
/// assert_eq!(result.category, Some(ActivityCategory::Exercise));
/// assert_eq!(result.date, now.checked_sub_days(chrono::Days::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer<C = SystemClock> {
    clock: C,
    keywords: KeywordMap,
    dates: DateOptions,
}

impl Analyzer<SystemClock> {
    /// Analyzer using the system clock and built-in keywords.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Analyzer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Analyzer<C> {
    /// Analyzer reading "now" from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            keywords: KeywordMap::builtin(),
            dates: DateOptions::default(),
        }
    }

    /// Replace the keyword table.
    #[must_use]
    pub fn keywords(mut self, keywords: KeywordMap) -> Self {
        self.keywords = keywords;
        self
    }

    /// Replace the calendar rules.
    #[must_use]
    pub fn date_options(mut self, options: DateOptions) -> Self {
        self.dates = options;
        self
    }

    /// The keyword table in use.
    #[must_use]
    pub const fn keyword_map(&self) -> &KeywordMap {
        &self.keywords
    }

    /// The calendar rules in use.
    #[must_use]
    pub const fn options(&self) -> &DateOptions {
        &self.dates
    }

    /// Analyze `input`. Total: every string, including `""`, yields a result.
    #[must_use]
    pub fn analyze(&self, input: &str) -> AnalysisResult {
        self.analyze_detailed(input).result
    }

    /// Analyze `input` and keep the intermediate tokens and date phrase.
    #[must_use]
    pub fn analyze_detailed(&self, input: &str) -> DetailedAnalysis {
        let now = self.clock.now();
        let tokens = lemmatize_text(input);
        let category = self.keywords.classify(&tokens);
        let date = extract_date(input, now, &self.dates);

        debug!(?tokens, ?category, date = ?date.as_ref().map(|d| d.at), "analyzed input");

        DetailedAnalysis {
            result: AnalysisResult {
                title: input.to_string(),
                category,
                date: date.as_ref().map(|d| d.at),
            },
            tokens,
            date,
            now,
        }
    }
}

/// Analyze `input` against a fixed `now` with the default rules.
#[must_use]
pub fn analyze_at(input: &str, now: NaiveDateTime) -> AnalysisResult {
    Analyzer::with_clock(FixedClock(now)).analyze(input)
}
