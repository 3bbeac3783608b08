use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::UserQuery,
    use_cases::fetch_profile::{FetchUserError, FetchUserProfileUseCase, UserProfileOutput},
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfileOutput, FetchUserError> {
        let user = self
            .user_query
            .find_by_id(user_id.value())
            .await?
            .ok_or_else(|| FetchUserError::UserNotFound(user_id.to_string()))?;

        Ok(user.into())
    }
}
