//! `docsite fmt`: rewrite the config in canonical form.

use anyhow::{Context, Result, bail};
use docsite::{SiteConfig, log};
use std::fs;

use super::FmtArgs;

pub fn format_config(config: &SiteConfig, args: &FmtArgs) -> Result<()> {
    let formatted = config.to_toml_string()?;

    if !args.check && !args.write {
        print!("{formatted}");
        return Ok(());
    }

    let path = &config.config_path;
    let current = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let name = path.display();

    if current == formatted {
        log!("fmt"; "{} already formatted", name);
        return Ok(());
    }

    if args.check {
        bail!("{} is not formatted, run 'docsite fmt --write'", name);
    }

    fs::write(path, &formatted)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    log!("fmt"; "formatted {}", name);
    Ok(())
}
