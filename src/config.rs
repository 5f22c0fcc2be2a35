use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the CheckTime server, e.g. "http://localhost:5000"
    pub base_url: String,

    /// Language the server should serve translations in
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Get the config directory path (~/.config/checktime)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("checktime");
    Ok(config_dir)
}

/// Get the config file path (~/.config/checktime/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/checktime/config.toml. A `--base-url` flag
/// skips the file entirely.
pub fn load_config(base_url_override: Option<String>) -> Result<Config> {
    if let Some(base_url) = base_url_override {
        return Ok(Config {
            base_url,
            language: default_language(),
        });
    }

    let path = config_path()?;

    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with the address of your CheckTime server:\n\n\
            base_url = \"http://localhost:5000\"\n\
            language = \"en\"\n\n\
            Or pass --base-url on the command line.",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}
