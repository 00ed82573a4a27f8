//! Runtime configuration: which store to use and display limits.
//!
//! Read from `config.json` in the platform config directory, then
//! overridden by environment variables.

use crate::constants::{
    CONFIG_FILE_NAME, DATA_FILE_NAME, DEFAULT_LEADERBOARD_LIMIT, ENV_DATA_FILE, ENV_STORE_KEY,
    ENV_STORE_URL,
};
use crate::error::{ProgressError, Result};
use crate::store::{JsonFileStore, MemoryStore, ProgressStore, RestStore};
use crate::utils::persistence::{config_dir, data_dir, load_json_or_default};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendConfig {
    Memory,
    File { path: PathBuf },
    Rest { url: String, api_key: String },
}

impl Default for BackendConfig {
    fn default() -> Self {
        let path = data_dir()
            .map(|dir| dir.join(DATA_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from(DATA_FILE_NAME));
        BackendConfig::File { path }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub leaderboard_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl Config {
    /// Load from the default location and apply environment overrides.
    pub fn load() -> Self {
        let file = config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME));
        Self::load_from(&file).with_overrides(|key| std::env::var(key).ok())
    }

    /// Load from `path`, falling back to defaults if missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        load_json_or_default(path)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    /// A store URL selects the REST backend; otherwise a data file path
    /// selects the file backend.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_STORE_URL) {
            let api_key = lookup(ENV_STORE_KEY).unwrap_or_default();
            self.backend = BackendConfig::Rest { url, api_key };
        } else if let Some(path) = lookup(ENV_DATA_FILE) {
            self.backend = BackendConfig::File {
                path: PathBuf::from(path),
            };
        }
        self
    }

    /// Open the configured store.
    pub fn open_store(&self) -> Result<Box<dyn ProgressStore>> {
        match &self.backend {
            BackendConfig::Memory => Ok(Box::new(MemoryStore::new())),
            BackendConfig::File { path } => Ok(Box::new(JsonFileStore::open(path)?)),
            BackendConfig::Rest { url, api_key } => {
                if url.is_empty() {
                    return Err(ProgressError::Config("store url is empty".to_string()));
                }
                if api_key.is_empty() {
                    log::warn!("no {} set; requests will be anonymous", ENV_STORE_KEY);
                }
                Ok(Box::new(RestStore::new(url.clone(), api_key.clone())))
            }
        }
    }
}
