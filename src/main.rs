use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use studymate::cli::args::{Cli, Commands};
use studymate::cli::commands;
use studymate::config::{ColorSetting, Config};
use studymate::error::StudymateError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StudymateError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output;

    let output = match cli.command {
        Commands::Chat(args) => commands::chat(&config, args, format)?,
        Commands::Timer(args) => commands::timer(&config, &args, format)?,
        Commands::Apps(args) => commands::apps(&config, &args, format)?,
        Commands::Sessions => commands::sessions(&config, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
        Commands::Tui => {
            studymate::tui::run(&config)?;
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
