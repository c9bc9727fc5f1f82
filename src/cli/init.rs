//! `docsite init`: write a starter config.

use anyhow::{Context, Result, bail};
use docsite::{
    embed::{CONFIG_FILE, DEFAULT_CONFIG},
    log,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the starter config into `dir` (default: current directory).
///
/// If `dry_run` is true, only prints the config to stdout.
pub fn new_config(dir: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{DEFAULT_CONFIG}");
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    let path = write_config(&root)?;
    log!("init"; "created {}", path.display());
    Ok(())
}

/// Write `docsite.toml` under `root`, creating `root` if needed.
///
/// Refuses to overwrite an existing file.
pub fn write_config(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or choose a different directory.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path)
}
