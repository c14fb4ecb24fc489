//! Console configuration: defaults, JSON file, environment and flags

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the appliance base URL.
pub const URL_ENV: &str = "RECVIEW_URL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8002";

/// Runtime settings shared by the backend client and the watch loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    pub stats_interval_secs: u64,
    pub uptime_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            stats_interval_secs: 30,
            uptime_interval_secs: 1,
        }
    }
}

impl Config {
    /// Read a JSON config file; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not a valid config document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw).map_err(|e| {
            Error::Config(format!("{}: {e}", path.as_ref().display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides looked up through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV).filter(|u| !u.trim().is_empty()) {
            log::debug!("base URL overridden by {URL_ENV}");
            self.base_url = url;
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] for a non-HTTP base URL or a zero timeout or interval.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than zero".to_string()));
        }
        if self.stats_interval_secs == 0 || self.uptime_interval_secs == 0 {
            return Err(Error::Config("intervals must be greater than zero".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn stats_interval(&self) -> Duration {
        Duration::from_secs(self.stats_interval_secs)
    }

    #[must_use]
    pub fn uptime_interval(&self) -> Duration {
        Duration::from_secs(self.uptime_interval_secs)
    }
}
