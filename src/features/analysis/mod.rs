//! Activity text analysis.
//!
//! Turns a short description such as "went to the gym yesterday" into a
//! category and an optional date:
//! - lemma tokens are matched against a keyword table (first hit wins)
//! - absolute date phrases are detected first ("dec 15", "2024-12-25")
//! - otherwise relative phrases are resolved ("last friday", "weekend")

mod absolute;
mod analyzer;
mod category;
mod classifier;
mod dates;
mod lemma;
mod relative;

pub use absolute::{detect_absolute, AbsoluteMatch};
pub use analyzer::{analyze_at, AnalysisResult, Analyzer, DetailedAnalysis};
pub use category::{ActivityCategory, UnknownCategory};
pub use classifier::KeywordMap;
pub use dates::{extract_date, DateOptions, DateSource, DetectedDate};
pub use lemma::{lemmatize_text, lemmatize_word};
pub use relative::{
    detect_relative, last_occurrence, next_occurrence, next_weekend_start, RelativeMatch,
    TRIGGER_WORDS,
};
