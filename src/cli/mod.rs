//! Command-line interface for whatidid.

pub mod args;
pub mod commands;
