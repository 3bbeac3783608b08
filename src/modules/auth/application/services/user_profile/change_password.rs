use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    ports::incoming::password_policy::PasswordPolicy,
    ports::outgoing::{PasswordHasher, UserQuery, UserRepository},
    use_cases::change_password::{ChangePasswordError, ChangePasswordInput, ChangePasswordUseCase},
};

pub struct ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> ChangePasswordUseCase for ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ChangePasswordInput) -> Result<(), ChangePasswordError> {
        self.password_policy
            .validate(&input.new_password)
            .map_err(|e| ChangePasswordError::InvalidPassword(e.to_string()))?;

        let user = self
            .user_query
            .find_by_id(input.user_id.value())
            .await?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(&input.current_password, &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !matches {
            return Err(ChangePasswordError::WrongCurrentPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(&input.new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.user_repository
            .update_password(user.id, new_hash)
            .await?;

        tracing::info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
