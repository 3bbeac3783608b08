use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone, PartialEq)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn is_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// `email` must already be lower-cased.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;

    async fn find_by_verification_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// Only matches while the reset token is still valid at `now`.
    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;
}
