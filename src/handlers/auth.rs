// handlers/auth.rs - demo token issuance and principal echo
use axum::Extension;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// GET /token - issues a demo token with fixed claims.
pub async fn issue_token() -> Result<String, ApiError> {
    let token = auth::generate_jwt(&Claims::demo())?;
    Ok(token)
}

/// GET /loginUser - greets whoever the bearer token says is calling.
pub async fn login_user(Extension(user): Extension<AuthUser>) -> String {
    format!("Welcome {}", user.name)
}
