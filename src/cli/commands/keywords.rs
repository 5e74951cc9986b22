//! Category and keyword listing commands.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::AppError;
use crate::features::analysis::ActivityCategory;
use crate::output::{format_categories, format_keywords};

/// Execute the categories command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn categories(format: OutputFormat) -> Result<String, AppError> {
    format_categories(&ActivityCategory::ALL, format)
}

/// Execute the keywords command.
///
/// Lists built-in keywords merged with configured ones, optionally limited to
/// one category.
///
/// # Errors
///
/// Returns an error if the category name is unknown or output formatting fails.
pub fn keywords(
    config: &Config,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String, AppError> {
    let filter = category
        .map(str::parse::<ActivityCategory>)
        .transpose()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    let map = config.analysis.keyword_map();
    let entries: Vec<_> = map
        .sorted_entries()
        .into_iter()
        .filter(|(_, c)| filter.map_or(true, |f| f == *c))
        .collect();

    format_keywords(&entries, format)
}
