//! Feature implementations for whatidid.
//!
//! - Activity text analysis (categories and dates)
//! - Staged progress reporting around an analysis

pub mod analysis;
pub mod progress;
