pub mod auth;
pub mod validate;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use validate::validate_todo_body;
