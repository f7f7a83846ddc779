use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub security: SecurityConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Issuer and expected audience of every token this service signs.
    pub jwt_issuer: String,
    /// Symmetric HMAC-SHA256 signing key.
    pub jwt_key: String,
    pub jwt_expiry_days: i64,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Upper bound on buffered request bodies in the validating middleware.
    pub max_request_size_bytes: usize,
}

impl AppConfig {
    /// Build from the environment. `JWT_ISSUER` and `JWT_KEY` are required;
    /// their absence is a startup misconfiguration and panics on purpose.
    pub fn from_env() -> Self {
        let jwt_issuer = env::var("JWT_ISSUER")
            .unwrap_or_else(|_| panic!("JWT_ISSUER must be set (token issuer and audience)"));
        let jwt_key = env::var("JWT_KEY")
            .unwrap_or_else(|_| panic!("JWT_KEY must be set (symmetric signing key)"));

        Self {
            security: SecurityConfig {
                jwt_issuer,
                jwt_key,
                jwt_expiry_days: 60,
            },
            api: ApiConfig {
                max_request_size_bytes: 2 * 1024 * 1024,
            },
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("JWT_EXPIRY_DAYS") {
            self.security.jwt_expiry_days = v.parse().unwrap_or(self.security.jwt_expiry_days);
        }
        if let Ok(v) = env::var("MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }
        self
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
