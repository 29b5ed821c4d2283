pub(crate) mod error;
pub(crate) mod retry;
pub(crate) mod service_client;

pub use error::{ClientError, Result as ClientResult};
pub use retry::{IsRetryable, RetryConfig, with_retry};
pub use service_client::ServiceClient;
