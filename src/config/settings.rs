//! Configuration settings for whatidid.
//!
//! Settings are loaded from `~/.whatidid/config.yaml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::core::{parse_weekday, Clock, SameWeekdayPolicy};
use crate::error::AppError;
use crate::features::analysis::{ActivityCategory, Analyzer, DateOptions, KeywordMap};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Analysis rules.
    pub analysis: AnalysisConfig,
    /// Progress display settings.
    pub progress: ProgressConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Analysis rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Category shown when no keyword matches.
    #[serde(default = "default_category")]
    pub default_category: ActivityCategory,
    /// Meaning of "last/next <weekday>" on that same weekday.
    #[serde(default)]
    pub same_weekday: SameWeekdayPolicy,
    /// First day of the weekend (e.g. "saturday").
    #[serde(default = "default_weekend_start")]
    pub weekend_start: String,
    /// Extra keywords, merged over the built-in table.
    #[serde(default)]
    pub keywords: BTreeMap<String, ActivityCategory>,
}

/// Progress display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Number of progress stages shown before the result.
    #[serde(default = "default_stages")]
    pub stages: u32,
    /// Delay between stages in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_category() -> ActivityCategory {
    ActivityCategory::Other
}

fn default_weekend_start() -> String {
    "saturday".to_string()
}

const fn default_stages() -> u32 {
    10
}

const fn default_interval_ms() -> u64 {
    200
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            same_weekday: SameWeekdayPolicy::default(),
            weekend_start: default_weekend_start(),
            keywords: BTreeMap::new(),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl AnalysisConfig {
    /// Calendar rules described by this section.
    ///
    /// # Errors
    ///
    /// Returns an error if `weekend_start` is not a weekday name.
    pub fn date_options(&self) -> Result<DateOptions, AppError> {
        let weekend_start = parse_weekday(self.weekend_start.trim()).ok_or_else(|| {
            AppError::Config(format!(
                "analysis.weekend_start: '{}' is not a weekday",
                self.weekend_start
            ))
        })?;

        Ok(DateOptions {
            same_weekday: self.same_weekday,
            weekend_start,
        })
    }

    /// Built-in keywords extended with the configured ones.
    #[must_use]
    pub fn keyword_map(&self) -> KeywordMap {
        KeywordMap::builtin().with_keywords(self.keywords.iter().map(|(k, c)| (k, *c)))
    }

    /// Build an analyzer applying these rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar rules are invalid.
    pub fn analyzer<C: Clock>(&self, clock: C) -> Result<Analyzer<C>, AppError> {
        Ok(Analyzer::with_clock(clock)
            .keywords(self.keyword_map())
            .date_options(self.date_options()?))
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, AppError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), AppError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            AppError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
