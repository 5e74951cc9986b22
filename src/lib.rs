//! whatidid - activity text analyzer
//!
//! This crate infers an activity category and a referenced date from short
//! free-text descriptions such as "I went to the gym yesterday".

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::AppError;
pub use features::analysis::{analyze_at, ActivityCategory, AnalysisResult, Analyzer};
