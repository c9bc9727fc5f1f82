//! docsite - documentation site config loader and validator.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common::load_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    docsite::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry } => cli::init::new_config(dir.as_deref(), *dry),
        Commands::Check => cli::check::check_config(&load_config(&cli)?),
        Commands::Show { args } => cli::show::show_config(&load_config(&cli)?, args),
        Commands::Fmt { args } => cli::fmt::format_config(&load_config(&cli)?, args),
    }
}
