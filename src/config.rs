use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_COMPILER, DEFAULT_STANDARD};

/// User settings read from `~/acf-config.json`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compiler: String,
    #[serde(rename = "standart", alias = "standard")]
    pub standard: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            compiler: DEFAULT_COMPILER.to_string(),
            standard: DEFAULT_STANDARD.to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the home directory. Any failure falls back to
    /// the defaults.
    pub fn load() -> Config {
        match config_path() {
            Some(path) => Config::load_from(&path),
            None => {
                tracing::debug!("Home directory is unknown, using default config");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Config {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Config {} is not readable: {}", path.display(), e);
                return Config::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::debug!("Config {} is invalid: {}", path.display(), e);
            Config::default()
        })
    }
}

fn config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}
