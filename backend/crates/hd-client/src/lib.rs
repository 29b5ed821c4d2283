//! Outbound clients for other help-desk services.

pub(crate) mod client;
pub(crate) mod users;


pub use client::{ClientError, ClientResult, IsRetryable, RetryConfig, ServiceClient, with_retry};
pub use users::{RemoteUser, UserServiceClient};
