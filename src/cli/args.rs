//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Documentation site config loader and validator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Reject unknown fields instead of warning about them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter docsite.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the starter config instead of writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// Load and validate the config
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved config for the site generator
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Rewrite the config in canonical form (comments are not preserved)
    #[command(visible_alias = "f")]
    Fmt {
        #[command(flatten)]
        args: FmtArgs,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ShowFormat::Json)]
    pub format: ShowFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    /// Resolved descriptor as JSON
    Json,
    /// Indented sidebar outline
    Tree,
}

/// Fmt command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct FmtArgs {
    /// Overwrite the config file in place
    #[arg(short, long, conflicts_with = "check")]
    pub write: bool,

    /// Exit with an error if the config file is not in canonical form
    #[arg(long)]
    pub check: bool,
}
