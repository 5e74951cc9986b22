//! Command implementations for whatidid.
//!
//! Each command returns its rendered output; `main` prints it.

mod analyze;
mod completions;
mod keywords;

pub use analyze::{analyze, progress_bar};
pub use completions::{completion_install_instructions, completions, generate_completions};
pub use keywords::{categories, keywords};
