use crate::auth::application::{
    ports::outgoing::UserRepository,
    use_cases::create_user::MAX_NAME_LEN,
    use_cases::fetch_profile::UserProfileOutput,
    use_cases::update_profile::{UpdateUserError, UpdateUserInput, UpdateUserProfileUseCase},
};
use async_trait::async_trait;

pub struct UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    user_repository: R,
}

impl<R> UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self {
            user_repository: repository,
        }
    }

    fn validate_name(&self, name: &str) -> Result<String, UpdateUserError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(UpdateUserError::InvalidName(
                "Name cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(UpdateUserError::InvalidName(format!(
                "Name must be at most {MAX_NAME_LEN} characters"
            )));
        }

        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl<R> UpdateUserProfileUseCase for UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateUserInput) -> Result<UserProfileOutput, UpdateUserError> {
        let name = self.validate_name(&data.name)?;

        let user = self
            .user_repository
            .update_name(data.user_id.value(), name)
            .await?;

        Ok(user.into())
    }
}
