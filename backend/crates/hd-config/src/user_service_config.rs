use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_USER_SERVICE_URL: &str = "http://127.0.0.1:8001";

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const MAX_RETRIES: u32 = 10;
pub const DEFAULT_RETRIES: u32 = 3;

pub const MIN_BACKOFF_MS: u64 = 10;
pub const MAX_BACKOFF_MS: u64 = 10_000;
pub const DEFAULT_BACKOFF_MS: u64 = 500;

/// Outbound client for the central user service.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct UserServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// First retry delay; doubles per retry
    pub backoff_ms: u64,
    /// Sent when the caller has no bearer token to forward
    pub service_token: Option<String>,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_USER_SERVICE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_RETRIES,
            backoff_ms: DEFAULT_BACKOFF_MS,
            service_token: None,
        }
    }
}

impl std::fmt::Debug for UserServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("backoff_ms", &self.backoff_ms)
            .field(
                "service_token",
                &self.service_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl UserServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::user_service(format!(
                "user_service.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::user_service(format!(
                "user_service.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.max_retries > MAX_RETRIES {
            return Err(ConfigError::user_service(format!(
                "user_service.max_retries must be 0-{}, got {}",
                MAX_RETRIES, self.max_retries
            )));
        }

        if self.backoff_ms < MIN_BACKOFF_MS || self.backoff_ms > MAX_BACKOFF_MS {
            return Err(ConfigError::user_service(format!(
                "user_service.backoff_ms must be {}-{}, got {}",
                MIN_BACKOFF_MS, MAX_BACKOFF_MS, self.backoff_ms
            )));
        }

        Ok(())
    }
}
