use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{user_query::UserQueryError, UserRepositoryError},
};

#[derive(Clone, Debug)]
pub struct ChangePasswordInput {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum ChangePasswordError {
    #[error("Current password is incorrect")]
    WrongCurrentPassword,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] UserRepositoryError),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(&self, input: ChangePasswordInput) -> Result<(), ChangePasswordError>;
}
