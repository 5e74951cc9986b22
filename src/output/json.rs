//! JSON output formatting for whatidid.

use serde_json::json;

use super::AnalysisReport;
use crate::error::AppError;
use crate::features::analysis::ActivityCategory;

/// Format an analysis as JSON
///
/// `date` and `now` are local wall-clock timestamps without an offset.
///
/// # Errors
///
/// Returns `AppError::Json` if JSON serialization fails.
pub fn format_analysis_json(report: &AnalysisReport<'_>) -> Result<String, AppError> {
    let analysis = report.analysis;
    let mut output = json!({
        "title": analysis.result.title,
        "category": report.category,
        "category_defaulted": report.defaulted,
        "date": analysis.result.date,
        "now": analysis.now,
    });

    if report.explain {
        output["tokens"] = json!(analysis.tokens);
        output["date_phrase"] = json!(analysis.date.as_ref().map(|d| &d.phrase));
        output["date_source"] = json!(analysis.date.as_ref().map(|d| d.source));
    }

    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format categories as JSON
///
/// # Errors
///
/// Returns `AppError::Json` if JSON serialization fails.
pub fn format_categories_json(categories: &[ActivityCategory]) -> Result<String, AppError> {
    let items: Vec<_> = categories
        .iter()
        .map(|c| json!({ "name": c, "label": c.label() }))
        .collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format keyword entries as JSON
///
/// # Errors
///
/// Returns `AppError::Json` if JSON serialization fails.
pub fn format_keywords_json(entries: &[(&str, ActivityCategory)]) -> Result<String, AppError> {
    let items: Vec<_> = entries
        .iter()
        .map(|(keyword, category)| json!({ "keyword": keyword, "category": category }))
        .collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
