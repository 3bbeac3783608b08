use crate::modules::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{
    redis::{self, AsyncCommands},
    Pool,
};
use std::sync::Arc;
use uuid::Uuid;

/// Redis-backed refresh token blacklist.
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "{user_id}"   (TTL = remaining token lifetime)
/// ```
///
/// A key that exists marks the token as revoked. Redis drops it once the
/// token would have expired anyway.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    /// Seconds until `expires_at`, never below one.
    fn ttl_seconds(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
        (expires_at - now).num_seconds().max(1) as u64
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::Storage(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn blacklist_token(
        &self,
        token_hash: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, TokenBlacklistError> {
        let ttl = Self::ttl_seconds(expires_at, Utc::now());
        let mut conn = self.get_conn().await?;

        // SET NX replies OK when the key was written and nil when it already existed.
        let reply: Option<String> = redis::cmd("SET")
            .arg(Self::token_key(token_hash))
            .arg(user_id.to_string())
            .arg("NX")
            .arg("EX")
            .arg(ttl)
            .query_async(&mut conn)
            .await
            .map_err(|e| TokenBlacklistError::Storage(e.to_string()))?;

        let inserted = reply.is_some();
        tracing::debug!(%user_id, ttl, inserted, "Refresh token blacklisted");
        Ok(inserted)
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenBlacklistError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use deadpool_redis::{Config, Runtime};

    fn unreachable_pool() -> Arc<Pool> {
        // Nothing listens on 6399
        let pool = Config::from_url("redis://127.0.0.1:6399")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();
        Arc::new(pool)
    }

    #[test]
    fn test_token_key_format() {
        assert_eq!(
            RedisTokenBlacklist::token_key("abc"),
            "auth:blacklist:token:abc"
        );
    }

    #[test]
    fn test_ttl_matches_remaining_lifetime() {
        let now = Utc::now();
        assert_eq!(
            RedisTokenBlacklist::ttl_seconds(now + Duration::seconds(90), now),
            90
        );
    }

    #[test]
    fn test_ttl_for_expired_token_is_clamped() {
        let now = Utc::now();
        assert_eq!(
            RedisTokenBlacklist::ttl_seconds(now - Duration::seconds(30), now),
            1
        );
    }

    #[tokio::test]
    async fn test_blacklist_token_connection_failure() {
        let blacklist = RedisTokenBlacklist::new(unreachable_pool());

        let result = blacklist
            .blacklist_token("hash", Uuid::new_v4(), Utc::now() + Duration::hours(1))
            .await;

        match result {
            Err(TokenBlacklistError::Storage(msg)) => assert!(msg.contains("Pool error")),
            other => panic!("Expected storage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_is_token_blacklisted_connection_failure() {
        let blacklist = RedisTokenBlacklist::new(unreachable_pool());

        assert!(matches!(
            blacklist.is_token_blacklisted("hash").await,
            Err(TokenBlacklistError::Storage(_))
        ));
    }
}
