//! The analyze command.

use std::io::Write;

use colored::Colorize;
use tracing::info;

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::core::{parse_instant, Clock, FixedClock, SystemClock};
use crate::error::AppError;
use crate::features::analysis::{Analyzer, DetailedAnalysis};
use crate::features::progress::{fraction, CancelToken, StageOutcome, StagedAnalysis};
use crate::output::{format_analysis, AnalysisReport};

const BAR_WIDTH: usize = 30;

/// Execute the analyze command.
///
/// # Errors
///
/// Returns an error if `--now` cannot be parsed, the analysis rules in the
/// config are invalid, or output formatting fails.
pub fn analyze(config: &Config, args: &AnalyzeArgs, format: OutputFormat) -> Result<String, AppError> {
    let input = args.joined_text();

    let analysis = match args.now.as_deref() {
        Some(raw) => {
            let now = parse_instant(raw).ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "--now '{raw}': expected YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS] or 'YYYY-MM-DD HH:MM[:SS]'"
                ))
            })?;
            let analyzer = config.analysis.analyzer(FixedClock(now))?;
            run(&analyzer, config, &input, args.progress)?
        },
        None => {
            let analyzer = config.analysis.analyzer(SystemClock)?;
            run(&analyzer, config, &input, args.progress)?
        },
    };

    let report = AnalysisReport::new(&analysis, config.analysis.default_category, args.explain);
    if report.defaulted {
        info!(category = %report.category, "no keyword matched, using default category");
    }

    format_analysis(&report, format)
}

fn run<C: Clock>(
    analyzer: &Analyzer<C>,
    config: &Config,
    input: &str,
    progress: bool,
) -> Result<DetailedAnalysis, AppError> {
    if !progress {
        return Ok(analyzer.analyze_detailed(input));
    }

    let staging = StagedAnalysis::from_config(&config.progress);
    info!(stages = staging.stages(), "running staged analysis");

    let mut stderr = std::io::stderr();
    let mut observer = |stage: u32, total: u32| {
        // Progress is cosmetic; a closed stderr must not fail the analysis.
        let _ = write!(stderr, "\r{}", progress_bar(stage, total));
        let _ = stderr.flush();
    };

    let outcome = staging.run_detailed(analyzer, input, &mut observer, &CancelToken::new());
    if staging.stages() > 0 {
        eprintln!();
    }

    match outcome {
        StageOutcome::Completed(analysis) => Ok(analysis),
        StageOutcome::Cancelled { .. } => Err(AppError::Cancelled),
    }
}

/// Render a one-line progress bar such as `[#####-----]  50%`.
#[must_use]
pub fn progress_bar(stage: u32, total: u32) -> String {
    let done = fraction(stage, total);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = (done * BAR_WIDTH as f64).round() as usize;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (done * 100.0).round() as u32;

    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled).dimmed(),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::analysis::ActivityCategory;
    use serde_json::Value;

    fn args(text: &str, now: Option<&str>) -> AnalyzeArgs {
        AnalyzeArgs {
            text: vec![text.to_string()],
            now: now.map(str::to_string),
            progress: false,
            explain: false,
        }
    }

    fn json(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_analyze_with_fixed_now() {
        let output = analyze(
            &Config::default(),
            &args("I went to the gym yesterday", Some("2024-03-13T10:30")),
            OutputFormat::Json,
        )
        .unwrap();
        let value = json(&output);

        assert_eq!(value["category"], "Exercise");
        assert_eq!(value["date"], "2024-03-12T10:30:00");
    }

    #[test]
    fn test_analyze_uses_configured_default_category() {
        let mut config = Config::default();
        config.analysis.default_category = ActivityCategory::Home;

        let value = json(&analyze(&config, &args("called mom", Some("2024-03-13")), OutputFormat::Json).unwrap());
        assert_eq!(value["category"], "Home");
        assert_eq!(value["category_defaulted"], true);
    }

    #[test]
    fn test_analyze_with_progress() {
        let mut config = Config::default();
        config.progress.interval_ms = 0;
        config.progress.stages = 3;

        let mut analyze_args = args("yoga today", Some("2024-03-13 08:00"));
        analyze_args.progress = true;

        let value = json(&analyze(&config, &analyze_args, OutputFormat::Json).unwrap());
        assert_eq!(value["category"], "Mindfulness");
        assert_eq!(value["date"], "2024-03-13T08:00:00");
    }

    #[test]
    fn test_analyze_invalid_now() {
        let err = analyze(&Config::default(), &args("work", Some("yesterday-ish")), OutputFormat::Json)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_analyze_invalid_weekend_start() {
        let mut config = Config::default();
        config.analysis.weekend_start = "funday".to_string();

        let err = analyze(&config, &args("work", None), OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_progress_bar() {
        colored::control::set_override(false);
        assert_eq!(progress_bar(0, 10), format!("[{}]   0%", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(10, 10), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
        assert!(progress_bar(5, 10).ends_with(" 50%"));
    }
}
