use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "whatidid")]
#[command(about = "Infer the category and date of a short activity description")]
#[command(long_about = "whatidid - activity text analyzer

Reads a short free-text note about something you did or plan to do and
infers what kind of activity it is and when it happened.

QUICK START:
  whatidid analyze \"I went to the gym yesterday\"
  whatidid analyze \"last Monday I did a work report\"
  whatidid analyze --now 2024-03-13T10:30 \"next friday I will meditate\"
  whatidid keywords --category exercise

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Configuration is read from ~/.whatidid/config.yaml (or $WHATIDID_HOME).")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// Logs go to stderr. RUST_LOG takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze an activity description
    ///
    /// Infers a category from keywords and a date from phrases such as
    /// "yesterday", "last friday", "dec 15" or "2024-12-25".
    ///
    /// # Examples
    ///
    ///   whatidid analyze "I went to the gym yesterday"
    ///   whatidid analyze swam on dec 15
    ///   whatidid analyze --progress "read a book over the weekend"
    ///   whatidid analyze --now "2024-03-13 10:30" "next friday I will meditate"
    #[command(alias = "a")]
    Analyze(AnalyzeArgs),

    /// List activity categories
    #[command(alias = "c")]
    Categories,

    /// List the keyword table in effect
    ///
    /// Shows built-in keywords merged with those from `analysis.keywords`
    /// in the config file.
    #[command(alias = "k")]
    Keywords {
        /// Only show keywords for this category (e.g. exercise)
        #[arg(long, short = 'c')]
        category: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: whatidid completions bash > ~/.bash_completion.d/whatidid
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Activity description (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Resolve relative dates against this instant instead of the clock
    ///
    /// Accepts YYYY-MM-DDTHH:MM[:SS], "YYYY-MM-DD HH:MM[:SS]" or YYYY-MM-DD.
    #[arg(long)]
    pub now: Option<String>,

    /// Show a progress bar on stderr before the result
    #[arg(long, short = 'p')]
    pub progress: bool,

    /// Also show lemma tokens and the matched date phrase
    #[arg(long, short = 'e')]
    pub explain: bool,
}

impl AnalyzeArgs {
    /// The description as a single string.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}
