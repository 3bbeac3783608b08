use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenBlacklistError {
    #[error("Blacklist storage error: {0}")]
    Storage(String),
}

/// Revoked refresh tokens, keyed by the SHA-256 of the raw token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// Atomically revokes the token. Returns `false` when it was already
    /// revoked, so callers can treat the insert as a one-time claim.
    /// Entries expire on their own once `expires_at` has passed.
    async fn blacklist_token(
        &self,
        token_hash: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, TokenBlacklistError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError>;
}
