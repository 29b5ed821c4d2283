pub mod user_response;
pub mod users;
