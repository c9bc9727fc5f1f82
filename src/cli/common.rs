//! Common utilities shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use docsite::{
    SiteConfig,
    config::{expand_config_path, find_config_file},
    log,
};

use super::Cli;

/// Locate the config file named by `--config`.
///
/// Absolute paths are used as-is; relative names are searched upward from
/// the current directory.
pub fn resolve_config_path(config: &Path) -> Result<PathBuf> {
    let expanded = expand_config_path(config);
    match find_config_file(&expanded) {
        Some(path) => Ok(path),
        None => bail!(
            "config file '{}' not found. Run 'docsite init' to create one.",
            config.display()
        ),
    }
}

/// Resolve, load and validate the config for a command.
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let path = resolve_config_path(&cli.config)?;
    Ok(SiteConfig::load(&path, cli.strict)?)
}

/// Write command output to a file, or to stdout.
pub fn write_output(content: &str, output: Option<&Path>, module: &str) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", content.trim_end())?;
            log!(module; "wrote output to {}", path.display());
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}
