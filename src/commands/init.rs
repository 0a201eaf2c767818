use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::config::FrictionConfig;

const CONFIG_FILE: &str = "frictionmap.toml";

/// Write a default configuration file to the current directory.
pub fn init_config(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists; use --force to overwrite");
    }

    let rendered = toml::to_string_pretty(&FrictionConfig::default())
        .context("failed to render default configuration")?;
    fs::write(path, rendered).with_context(|| format!("failed to write {CONFIG_FILE}"))?;
    println!("Created {CONFIG_FILE}");
    Ok(())
}
