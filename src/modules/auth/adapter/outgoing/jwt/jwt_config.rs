use crate::config::{parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // Expiration in seconds
    pub refresh_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters", Self::MIN_SECRET_LEN),
            });
        }

        let access_token_expiry: i64 = parse_or("JWT_ACCESS_EXPIRY", 1800)?;
        let refresh_token_expiry: i64 = parse_or("JWT_REFRESH_EXPIRY", 604800)?;

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY",
                reason: "must be greater than JWT_ACCESS_EXPIRY".to_string(),
            });
        }

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "premier-deals".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
