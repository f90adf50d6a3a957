use std::env;
use std::time::Duration;

use crate::error::{ConfigError, Error};
use crate::nhl_client::NHL_BASE_URL;

const NHL_BASE_URL_VAR: &str = "MY_SPORTS_NHL_BASE_URL";
const HTTP_TIMEOUT_VAR: &str = "MY_SPORTS_HTTP_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Root of the NHL web API. Point it at a proxy or a mock server to
    /// rewrite where requests go.
    pub nhl_base_url: String,
    /// Transport timeout. Unset means the client waits indefinitely.
    pub http_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nhl_base_url: NHL_BASE_URL.into(),
            http_timeout: None,
        }
    }
}

impl Config {
    // call dotenv first if a .env file should be honored
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(NHL_BASE_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config.nhl_base_url = url.trim().trim_end_matches('/').to_owned();
        }

        if let Some(raw) = lookup(HTTP_TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::new(HTTP_TIMEOUT_VAR, &raw, e))?;
            if secs == 0 {
                return Err(ConfigError::new(HTTP_TIMEOUT_VAR, &raw, "must be positive").into());
            }
            config.http_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
