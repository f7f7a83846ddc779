use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

/// Claims carried by the demo token.
///
/// Issuer and audience are both the configured `JWT_ISSUER` value, mirroring a
/// single-service symmetric-key setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub nbf: i64,
    pub exp: i64,
}

impl Claims {
    /// The fixed demo identity issued by `GET /token`.
    pub fn demo() -> Self {
        let now = Utc::now();
        let security = &config::config().security;

        Self {
            sub: "user-id".to_string(),
            name: "Test Name".to_string(),
            role: "Admin".to_string(),
            iss: security.jwt_issuer.clone(),
            aud: security.jwt_issuer.clone(),
            nbf: now.timestamp(),
            exp: (now + Duration::days(security.jwt_expiry_days)).timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("invalid JWT token: {0}")]
    TokenValidation(String),

    #[error("invalid JWT secret")]
    InvalidSecret,
}

/// Sign `claims` into a compact HS256 token with the configured key.
pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_key;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Decode and verify a token, checking signature, expiry, issuer and audience.
pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    let security = &config::config().security;

    if security.jwt_key.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_key.as_bytes());
    let mut validation = Validation::default();
    validation.set_issuer(&[&security.jwt_issuer]);
    validation.set_audience(&[&security.jwt_issuer]);

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::TokenValidation(e.to_string()))?;

    Ok(token_data.claims)
}
