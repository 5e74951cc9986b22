use clap::Parser;
use colored::Colorize;

use whatidid::cli::args::{Cli, Commands};
use whatidid::cli::commands;
use whatidid::config::{ColorSetting, Config};
use whatidid::error::AppError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = whatidid::logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Analyze(args) => commands::analyze(&config, &args, format)?,
        Commands::Categories => commands::categories(format)?,
        Commands::Keywords { category } => commands::keywords(&config, category.as_deref(), format)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
