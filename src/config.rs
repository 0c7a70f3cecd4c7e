use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the classification service base URL
pub const API_URL_ENV: &str = "DIGIT_API_URL";

/// Environment variable holding the request timeout in whole seconds (`0` disables it)
pub const API_TIMEOUT_ENV: &str = "DIGIT_API_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the classification service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = match read(API_URL_ENV) {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_owned(),
        };

        let request_timeout = match read(API_TIMEOUT_ENV) {
            Some(raw) => parse_timeout(&raw)?,
            None => Some(DEFAULT_TIMEOUT),
        };

        Ok(Self {
            base_url,
            request_timeout,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed).map_err(|err| ConfigError::InvalidUrl {
        url: trimmed.to_owned(),
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            url: trimmed.to_owned(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn parse_timeout(raw: &str) -> Result<Option<Duration>, ConfigError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_owned()))?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}
