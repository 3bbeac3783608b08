use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS: &str = "access";
const REFRESH: &str = "refresh";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn refresh_token_expiry(&self) -> i64 {
        self.config.refresh_token_expiry
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        role: UserRole,
        is_verified: bool,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            role,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
            is_verified,
            jti: Uuid::new_v4(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        role: UserRole,
        is_verified: bool,
    ) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            role,
            is_verified,
            ACCESS,
            self.config.access_token_expiry,
        )
    }

    fn generate_refresh_token(
        &self,
        user_id: Uuid,
        role: UserRole,
        is_verified: bool,
    ) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            role,
            is_verified,
            REFRESH,
            self.config.refresh_token_expiry,
        )
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;

        if claims.token_type != REFRESH {
            tracing::warn!(
                "Token type mismatch: expected 'refresh', got '{}'",
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(REFRESH.to_string()));
        }

        tracing::debug!(user_id = %claims.sub, "Refresh token validated, issuing access token");
        self.generate_access_token(claims.sub, claims.role, claims.is_verified)
    }
}
