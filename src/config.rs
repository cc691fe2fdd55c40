use anyhow::{anyhow, Context, Result};
use std::time::Duration;

use crate::constants::{API_KEY_ENV, DEFAULT_TIMEOUT_SECS, OPENWEATHER_API_BASE, TIMEOUT_ENV};

/// Settings the weather client is built from.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENWEATHER_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("{API_KEY_ENV} is not set"))?;

        let mut config = Self::new(api_key);

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))?;
            if secs == 0 {
                anyhow::bail!("{TIMEOUT_ENV} must be greater than zero");
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

// Keep the API key out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
