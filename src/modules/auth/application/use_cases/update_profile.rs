use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::UserRepositoryError,
    use_cases::fetch_profile::UserProfileOutput,
};

#[derive(Clone, Debug)]
pub struct UpdateUserInput {
    pub user_id: UserId,
    pub name: String,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum UpdateUserError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            other => UpdateUserError::RepositoryError(other),
        }
    }
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(&self, data: UpdateUserInput) -> Result<UserProfileOutput, UpdateUserError>;
}
