use std::path::Path;

use anyhow::{Context as _, Result};
use mailblocks_core::BuilderConfig;

/// Reads builder settings from a TOML file. Without a path the defaults
/// apply.
pub fn load(path: Option<&Path>) -> Result<BuilderConfig> {
    let Some(path) = path else {
        return Ok(BuilderConfig::default().with_defaults());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn parse(text: &str) -> Result<BuilderConfig> {
    let config: BuilderConfig = toml::from_str(text)?;
    Ok(config.with_defaults())
}
