//! Application configuration.
//!
//! Configuration lives at `$HOME/.config/roleprompt/config.toml` and is
//! entirely optional; every key has a default.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;

const CONFIG_DIR: &str = "roleprompt";
const CONFIG_FILE: &str = "config.toml";
const STORE_FILE: &str = "prompt_store.json";

/// Application-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the prompt store blob.
    pub store_path: PathBuf,
    /// Preferred launch destination: `"app"` (default) or `"web"`.
    pub launch_target: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    store_path: Option<PathBuf>,
    launch_target: Option<String>,
}

impl Config {
    /// Load configuration from the HOME-based config directory, applying
    /// defaults for anything unset.
    pub fn load() -> Result<Self, AppError> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
        let config_dir = PathBuf::from(home).join(".config").join(CONFIG_DIR);

        let raw = match fs::read_to_string(config_dir.join(CONFIG_FILE)) {
            Ok(content) => toml::from_str::<RawConfig>(&content)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => RawConfig::default(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            store_path: raw.store_path.unwrap_or_else(|| config_dir.join(STORE_FILE)),
            launch_target: raw.launch_target.unwrap_or_else(|| "app".to_string()),
        })
    }

    /// Create a configuration rooted at a custom store path.
    pub fn with_store_path(path: PathBuf) -> Self {
        Self { store_path: path, launch_target: "app".to_string() }
    }

    pub fn prefer_web_launch(&self) -> bool {
        self.launch_target.eq_ignore_ascii_case("web")
    }
}
