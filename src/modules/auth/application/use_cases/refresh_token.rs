use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::auth::application::services::token::hash_token;

// ========================= Refresh Token Request =========================
/// Validated refresh token request
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone)]
pub enum RefreshTokenRequestError {
    EmptyToken,
}

impl std::fmt::Display for RefreshTokenRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenRequestError::EmptyToken => write!(f, "Refresh token cannot be empty"),
        }
    }
}

impl std::error::Error for RefreshTokenRequestError {}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RefreshTokenRequestHelper {
            #[serde(alias = "refresh_token")]
            refresh_token: String,
        }

        let helper = RefreshTokenRequestHelper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    TokenExpired,
    TokenInvalid,
    TokenNotYetValid,
    InvalidTokenType,
    InvalidSignature,
    TokenRevoked,
    TokenGenerationFailed(String),
    BlacklistError(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshTokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            RefreshTokenError::InvalidTokenType => write!(f, "Invalid token type"),
            RefreshTokenError::InvalidSignature => write!(f, "Invalid token signature"),
            RefreshTokenError::TokenRevoked => write!(f, "Refresh token has been revoked"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshTokenError::BlacklistError(msg) => write!(f, "Blacklist error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshTokenError {}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::TokenNotYetValid => RefreshTokenError::TokenNotYetValid,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::InvalidSignature => RefreshTokenError::InvalidSignature,
            TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
        }
    }
}

impl From<TokenBlacklistError> for RefreshTokenError {
    fn from(error: TokenBlacklistError) -> Self {
        RefreshTokenError::BlacklistError(error.to_string())
    }
}

// ============================ Refresh Token Response =========================
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

/// With rotation on, the presented refresh token is revoked and a new one issued.
#[derive(Clone)]
pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    enable_token_rotation: bool,
}

impl RefreshTokenUseCase {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    ) -> Self {
        Self {
            token_provider,
            blacklist,
            enable_token_rotation: true,
        }
    }

    pub fn with_token_rotation(mut self, enable: bool) -> Self {
        self.enable_token_rotation = enable;
        self
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let claims = self.token_provider.verify_token(request.refresh_token())?;

        if claims.token_type != "refresh" {
            return Err(RefreshTokenError::InvalidTokenType);
        }

        let token_hash = hash_token(request.refresh_token());

        let refresh_token = if self.enable_token_rotation {
            // Revoking is the claim: of two concurrent refreshes only one inserts.
            let expires_at =
                DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);
            let claimed = self
                .blacklist
                .blacklist_token(&token_hash, claims.sub, expires_at)
                .await?;
            if !claimed {
                tracing::warn!(user_id = %claims.sub, "Revoked refresh token presented");
                return Err(RefreshTokenError::TokenRevoked);
            }

            self.token_provider
                .generate_refresh_token(claims.sub, claims.role, claims.is_verified)
                .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?
        } else {
            if self.blacklist.is_token_blacklisted(&token_hash).await? {
                tracing::warn!(user_id = %claims.sub, "Revoked refresh token presented");
                return Err(RefreshTokenError::TokenRevoked);
            }
            request.refresh_token().to_string()
        };

        let access_token = self
            .token_provider
            .generate_access_token(claims.sub, claims.role, claims.is_verified)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshTokenResponse {
            access_token,
            refresh_token,
        })
    }
}
