use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::{
    domain::entities::{UserId, UserRole},
    ports::outgoing::user_query::{UserQueryError, UserQueryResult},
};

#[derive(Clone, Debug)]
pub struct UserProfileOutput {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserQueryResult> for UserProfileOutput {
    fn from(user: UserQueryResult) -> Self {
        Self {
            user_id: user.id.into(),
            email_verified: user.is_verified(),
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfileOutput, FetchUserError>;
}
