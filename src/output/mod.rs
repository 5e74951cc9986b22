//! Output formatting for whatidid.
//!
//! This module provides formatters for displaying analysis results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::AppError;
use crate::features::analysis::{ActivityCategory, DetailedAnalysis};

pub use json::*;
pub use pretty::*;

/// Timestamp layout used in pretty output.
pub const DATE_DISPLAY_FORMAT: &str = "%a %Y-%m-%d %H:%M";

/// One analysis as presented to the user.
///
/// `category` is the category shown, which may be the configured default when
/// no keyword matched; `defaulted` records that substitution.
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub analysis: &'a DetailedAnalysis,
    pub category: ActivityCategory,
    pub defaulted: bool,
    /// Include tokens and the matched date phrase.
    pub explain: bool,
}

impl<'a> AnalysisReport<'a> {
    /// Build a report, substituting `default` when no category was inferred.
    #[must_use]
    pub fn new(analysis: &'a DetailedAnalysis, default: ActivityCategory, explain: bool) -> Self {
        Self {
            analysis,
            category: analysis.result.category_or(default),
            defaulted: analysis.result.category.is_none(),
            explain,
        }
    }
}

/// Format an analysis based on output format
///
/// # Errors
///
/// Returns `AppError::Json` if JSON serialization fails.
pub fn format_analysis(report: &AnalysisReport<'_>, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Pretty => Ok(format_analysis_pretty(report)),
        OutputFormat::Json => format_analysis_json(report),
    }
}

/// Format the category list based on output format
///
/// # Errors
///
/// Returns `AppError::Json` if JSON serialization fails.
pub fn format_categories(categories: &[ActivityCategory], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Pretty => Ok(format_categories_pretty(categories)),
        OutputFormat::Json => format_categories_json(categories),
    }
}

/// Format keyword entries based on output format
///
/// # Errors
///
/// Returns `AppError::Json` if JSON serialization fails.
pub fn format_keywords(
    entries: &[(&str, ActivityCategory)],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Pretty => Ok(format_keywords_pretty(entries)),
        OutputFormat::Json => format_keywords_json(entries),
    }
}
