use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::token::hash_token;

// ========================= Logout Request =========================
#[derive(Debug, Clone)]
pub struct LogoutRequest {
    refresh_token: Option<String>,
}

impl LogoutRequest {
    pub fn new(refresh_token: Option<String>) -> Self {
        Self {
            refresh_token: refresh_token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

impl<'de> Deserialize<'de> for LogoutRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LogoutRequestHelper {
            #[serde(default, alias = "refresh_token")]
            refresh_token: Option<String>,
        }

        let helper = LogoutRequestHelper::deserialize(deserializer)?;
        Ok(LogoutRequest::new(helper.refresh_token))
    }
}

// ====================== Logout Response =============================
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

// ====================== Logout Error =============================
#[derive(Debug, Clone)]
pub enum LogoutError {
    TokenRevocationFailed(String),
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::TokenRevocationFailed(msg) => {
                write!(f, "Token revocation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LogoutError {}

impl From<TokenBlacklistError> for LogoutError {
    fn from(error: TokenBlacklistError) -> Self {
        LogoutError::TokenRevocationFailed(error.to_string())
    }
}

// ============================ Logout Use Case =============================
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        request: LogoutRequest,
    ) -> Result<LogoutResponse, LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LogoutUseCase {
    pub fn new(
        blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            blacklist,
            token_provider,
        }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    /// Logout always succeeds from the caller's side; only a storage failure is an error.
    async fn execute(
        &self,
        user_id: Uuid,
        request: LogoutRequest,
    ) -> Result<LogoutResponse, LogoutError> {
        if let Some(refresh_token) = request.refresh_token() {
            match self.token_provider.verify_token(refresh_token) {
                Ok(claims) if claims.token_type == "refresh" && claims.sub == user_id => {
                    let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
                        .unwrap_or_else(Utc::now);

                    let revoked = self
                        .blacklist
                        .blacklist_token(&hash_token(refresh_token), claims.sub, expires_at)
                        .await?;

                    if revoked {
                        info!(user_id = %user_id, "Refresh token revoked on logout");
                    }
                }
                Ok(_) => {
                    warn!(user_id = %user_id, "Logout with a token not owned by the caller");
                }
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "Ignoring invalid refresh token on logout");
                }
            }
        }

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
