use crate::{ClientError, ClientResult, RetryConfig, with_retry};

use hd_config::UserServiceConfig;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for one downstream service.
///
/// Explicitly constructed and injected; every request gets the configured timeout
/// and retry policy.
#[derive(Clone)]
pub struct ServiceClient {
    base_url: String,
    default_token: Option<String>,
    retry: RetryConfig,
    client: ReqwestClient,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_token: None,
            retry,
            client,
        })
    }

    pub fn from_config(config: &UserServiceConfig) -> ClientResult<Self> {
        let client = Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            RetryConfig::from(config),
        )?;
        Ok(client.with_default_token(config.service_token.clone()))
    }

    /// Token used when a call does not forward the caller's own
    pub fn with_default_token(mut self, token: Option<String>) -> Self {
        self.default_token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body, retrying transient failures
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let operation = format!("GET {}", path);
        with_retry(&self.retry, &operation, || self.get_once(path, token)).await
    }

    async fn get_once<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url);

        if let Some(token) = token.or(self.default_token.as_deref()) {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::not_found(path));
        }

        if !status.is_success() {
            let (code, message) = error_parts(&body, status);
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// `{"error": {"code", "message"}}` or `{"detail": ...}`, else the status text
fn error_parts(body: &[u8], status: StatusCode) -> (String, String) {
    let fallback = status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string();

    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return (String::from("UNKNOWN"), fallback);
    };

    if let Some(error) = value.get("error") {
        let code = error
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or(fallback);
        return (code, message);
    }

    let message = value
        .get("detail")
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or(fallback);
    (String::from("UNKNOWN"), message)
}
