use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Projects endpoint of the tracker's v3 XML API
pub const DEFAULT_API_URL: &str = "https://www.pivotaltracker.com/services/v3/projects";

/// Whole-run timeout used when `TRACKER_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the projects collection; per-project URLs are built beneath it
    pub api_url: String,
    /// Static credential sent with every request
    pub api_token: String,
    /// Upper bound for a complete fetch-and-report run
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = var("TRACKER_API_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::Missing("TRACKER_API_TOKEN"))?;

        let api_url = var("TRACKER_API_URL")
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match var("TRACKER_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "TRACKER_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
