pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::principal::{CurrentPrincipal, MaybePrincipal},
    me::get_me,
    users::{
        user_response::{UserResponse, UserSource},
        users::get_user,
    },
};
pub use error::{Result as ServerResult, ServerError};
pub use middleware::authenticate_request;
pub use routes::build_router;
pub use state::ServerState;
