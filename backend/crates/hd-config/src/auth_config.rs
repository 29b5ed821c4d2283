use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_JWT_ALGORITHM, DEFAULT_LEEWAY_SECS, MAX_LEEWAY_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

/// HMAC algorithms a deployment may sign with
pub const SUPPORTED_JWT_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// Token verification settings shared with the identity authority.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub jwt_algorithm: String,
    /// Clock skew tolerated on `exp`/`nbf`
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_algorithm: String::from(DEFAULT_JWT_ALGORITHM),
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }
}

// Keeps the secret out of `{:?}` output
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !self.algorithm_supported() {
            return Err(ConfigError::auth(format!(
                "auth.jwt_algorithm must be one of {}, got '{}'",
                SUPPORTED_JWT_ALGORITHMS.join(", "),
                self.jwt_algorithm
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        Ok(())
    }

    fn algorithm_supported(&self) -> bool {
        SUPPORTED_JWT_ALGORITHMS
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(self.jwt_algorithm.trim()))
    }
}
