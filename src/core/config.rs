use crate::core::diff_graph::DEFAULT_DIFF_WIDTH;
use crate::core::dirs::get_config_directory;
use crate::core::error::{GitLsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_FILE: &str = "config.json";

/// Optional user settings from `<config dir>/git-ls/config.json`.
/// Command line flags take precedence over everything here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LsConfig {
    pub diff_width: usize,
}

impl Default for LsConfig {
    fn default() -> Self {
        Self {
            diff_width: DEFAULT_DIFF_WIDTH,
        }
    }
}

impl LsConfig {
    /// Load the user's config, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match get_config_directory() {
            Ok(config_dir) => Self::load_from(&config_dir.join(CONFIG_FILE)),
            Err(e) => {
                log::debug!("no config directory ({e}), using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!("no config file at {}", config_file.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| GitLsError::config_read_failed(config_file, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| GitLsError::config_parse_failed(config_file, e))?;

        log::debug!("loaded config from {}: {config:?}", config_file.display());
        Ok(config)
    }
}
