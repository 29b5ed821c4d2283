pub mod bearer;
pub mod claim_set;
pub mod claims;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;

pub use bearer::bearer_token;
pub use claim_set::{ClaimSet, split_full_name};
pub use claims::TokenClaims;
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::{DEFAULT_LEEWAY_SECS, JwtValidator};

#[cfg(test)]
mod tests;
