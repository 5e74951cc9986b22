//! Configuration management for whatidid.
//!
//! This module handles loading and saving configuration from `~/.whatidid/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{AnalysisConfig, ColorSetting, Config, GeneralConfig, ProgressConfig};
