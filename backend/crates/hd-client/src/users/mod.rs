pub(crate) mod remote_user;
pub(crate) mod user_service_client;

pub use remote_user::RemoteUser;
pub use user_service_client::UserServiceClient;
