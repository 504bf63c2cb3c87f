use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub fixtures: FixturesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FixturesConfig {
    /// Directory with `products.json`, `categories.json` and `users.json`.
    /// Built-in fixtures are used when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            no_results_message: default_no_results_message(),
        }
    }
}

fn default_color() -> bool {
    true
}
fn default_no_results_message() -> String {
    "No products matching selected criteria".to_string()
}

impl Config {
    /// Built-in fixtures and default display settings.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate display
    if config.display.no_results_message.trim().is_empty() {
        anyhow::bail!("display.no_results_message must not be empty");
    }

    // Validate fixtures
    if let Some(dir) = &config.fixtures.dir {
        if !dir.is_dir() {
            anyhow::bail!("fixtures.dir is not a directory: {}", dir.display());
        }
    }

    Ok(config)
}

/// Load `path`, or fall back to [`Config::minimal`] when `path` is the
/// default location and nothing exists there.
pub fn load_or_minimal(path: &Path, is_default_path: bool) -> Result<Config> {
    if is_default_path && !path.exists() {
        return Ok(Config::minimal());
    }
    load_config(path)
}
