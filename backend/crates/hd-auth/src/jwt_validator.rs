use crate::{AuthError, ClaimSet, JwtAlgorithm, Result as AuthErrorResult, TokenClaims};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{DecodingKey, Validation, decode, errors::ErrorKind};

/// Clock skew tolerance applied to `exp` and `nbf`
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Claims codec: verifies signature and expiry, then flattens the payload.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: JwtAlgorithm,
}

impl JwtValidator {
    pub fn new(algorithm: JwtAlgorithm, secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(algorithm.into());
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = leeway_secs;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            algorithm,
        }
    }

    /// Create validator with HS256 and the default leeway
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::new(JwtAlgorithm::HS256, secret, DEFAULT_LEEWAY_SECS)
    }

    /// Verify the token and return the raw payload
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired {
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    }
                }
                _ => AuthError::MalformedToken {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        Ok(token_data.claims)
    }

    /// Verify the token and return its normalised claim set
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<ClaimSet> {
        self.decode(token)?.into_claim_set()
    }

    pub fn algorithm(&self) -> JwtAlgorithm {
        self.algorithm
    }
}
