//! Configuration for the timetrak application.
//!
//! Settings are resolved in layers, each overriding the previous one:
//!
//! 1. Built-in defaults
//! 2. `config.json` in the platform data directory, if present
//! 3. A `.env` file in the working directory (loaded into the process
//!    environment via `dotenv`)
//! 4. Process environment variables
//!
//! | Key                | Environment variable   | Default                          |
//! |--------------------|------------------------|----------------------------------|
//! | `api_key`          | `CLOCKIFY_API_KEY`     | none, required                   |
//! | `api_url`          | `CLOCKIFY_API_URL`     | `https://api.clockify.me/api/v1` |
//! | `tag_name`         | `TIMETRAK_TAG`         | `TimeTrak`                       |
//! | `refresh_interval` | `TIMETRAK_REFRESH_MS`  | `1000`                           |
//!
//! ```rust,no_run
//! use timetrak::libs::config::Config;
//!
//! let config = Config::read()?;
//! let api_key = config.api_key()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "https://api.clockify.me/api/v1";
pub const DEFAULT_TAG_NAME: &str = "TimeTrak";
pub const DEFAULT_REFRESH_INTERVAL: u64 = 1000;

pub const ENV_API_KEY: &str = "CLOCKIFY_API_KEY";
pub const ENV_API_URL: &str = "CLOCKIFY_API_URL";
pub const ENV_TAG_NAME: &str = "TIMETRAK_TAG";
pub const ENV_REFRESH_INTERVAL: &str = "TIMETRAK_REFRESH_MS";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Clockify personal API key, sent as `X-Api-Key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the Clockify REST API, without a trailing slash.
    pub api_url: String,

    /// Name of the tag attached to every entry this tool submits.
    pub tag_name: String,

    /// Refresh interval of the tracking screen in milliseconds.
    pub refresh_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            tag_name: DEFAULT_TAG_NAME.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl Config {
    /// Resolves the configuration from all layers.
    pub fn read() -> Result<Self> {
        dotenv::dotenv().ok();
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME);
        Ok(Self::from_file(&config_file_path)?.apply_env(|key| env::var(key).ok()))
    }

    /// Reads `path` as JSON, or returns the defaults when the file is missing.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        Ok(config)
    }

    /// Overrides fields with values returned by `lookup` for the known
    /// environment variable names. Empty values are ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(api_key) = value(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(api_url) = value(ENV_API_URL) {
            self.api_url = api_url;
        }
        if let Some(tag_name) = value(ENV_TAG_NAME) {
            self.tag_name = tag_name;
        }
        if let Some(refresh_interval) = value(ENV_REFRESH_INTERVAL).and_then(|v| v.parse().ok()) {
            self.refresh_interval = refresh_interval;
        }
        self.api_url = self.api_url.trim_end_matches('/').to_string();
        self
    }

    /// The API key, or an error when it is missing or blank.
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => msg_bail_anyhow!(Message::ApiKeyMissing),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval.max(1))
    }
}
