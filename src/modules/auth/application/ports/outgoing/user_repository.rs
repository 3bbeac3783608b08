use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserData {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub verification_token_hash: Option<String>,
    /// Set for operator-provisioned accounts that skip the email round trip.
    pub email_verified: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData)
        -> Result<UserQueryResult, UserRepositoryError>;

    /// Stamps `email_verified_at` and clears the verification token.
    async fn mark_email_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Stores the new hash and clears any pending reset token.
    async fn reset_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_name(
        &self,
        user_id: Uuid,
        name: String,
    ) -> Result<UserQueryResult, UserRepositoryError>;
}
