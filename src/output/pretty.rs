use colored::Colorize;

use super::{AnalysisReport, DATE_DISPLAY_FORMAT};
use crate::features::analysis::{ActivityCategory, DateSource};

/// Format an analysis as pretty output
pub fn format_analysis_pretty(report: &AnalysisReport<'_>) -> String {
    let analysis = report.analysis;
    let mut output = format!("{}\n", analysis.result.title.bold());

    let category = if report.defaulted {
        format!("{} {}", report.category.label(), "(default)".dimmed())
    } else {
        report.category.label().green().to_string()
    };
    output.push_str(&format!("  {}: {}\n", "Category".dimmed(), category));

    let date = analysis.result.date.map_or_else(
        || "none".dimmed().to_string(),
        |d| d.format(DATE_DISPLAY_FORMAT).to_string().yellow().to_string(),
    );
    output.push_str(&format!("  {}: {}\n", "Date".dimmed(), date));

    if report.explain {
        output.push_str(&format!(
            "  {}: {}\n",
            "Tokens".dimmed(),
            analysis.tokens.join(" ").cyan()
        ));
        if let Some(detected) = &analysis.date {
            let source = match detected.source {
                DateSource::Absolute => "absolute",
                DateSource::Relative => "relative",
            };
            output.push_str(&format!(
                "  {}: \"{}\" ({})\n",
                "Phrase".dimmed(),
                detected.phrase,
                source
            ));
        }
        output.push_str(&format!(
            "  {}: {}\n",
            "Now".dimmed(),
            analysis.now.format(DATE_DISPLAY_FORMAT)
        ));
    }

    output
}

/// Format the category list as pretty output
pub fn format_categories_pretty(categories: &[ActivityCategory]) -> String {
    let mut output = format!("Categories ({})\n", categories.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for category in categories {
        output.push_str(&format!("  {}\n", category.label().bold()));
    }

    output
}

/// Format keyword entries as pretty output
pub fn format_keywords_pretty(entries: &[(&str, ActivityCategory)]) -> String {
    if entries.is_empty() {
        return "Keywords (0)\n  No keywords".to_string();
    }

    let width = entries.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let mut output = format!("Keywords ({})\n", entries.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (keyword, category) in entries {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            keyword.cyan(),
            category.label()
        ));
    }

    output
}
