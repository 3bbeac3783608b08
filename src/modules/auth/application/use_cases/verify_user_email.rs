use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::token::hash_token;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;

/// Verification links are valid for this long after the account was created.
pub const VERIFICATION_WINDOW_HOURS: i64 = 24;

pub const VERIFIED_MESSAGE: &str =
    "Email verified successfully! You can now sign in to your account.";

#[derive(Debug, Clone)]
pub struct VerifyEmailOutput {
    pub user_id: Uuid,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("Verification token is required")]
    MissingToken,

    #[error("Invalid or expired verification token")]
    InvalidToken,

    #[error("Verification token has expired")]
    TokenExpired,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] UserRepositoryError),
}

#[async_trait]
pub trait IVerifyUserEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<VerifyEmailOutput, VerifyEmailError>;
}

pub struct VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            email_notifier,
        }
    }

    fn is_expired(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - created_at > Duration::hours(VERIFICATION_WINDOW_HOURS)
    }
}

#[async_trait]
impl<Q, R> IVerifyUserEmailUseCase for VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<VerifyEmailOutput, VerifyEmailError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(VerifyEmailError::MissingToken);
        }

        let user = self
            .query
            .find_by_verification_token_hash(&hash_token(token))
            .await?
            .ok_or(VerifyEmailError::InvalidToken)?;

        if Self::is_expired(user.created_at, Utc::now()) {
            return Err(VerifyEmailError::TokenExpired);
        }

        self.repository.mark_email_verified(user.id).await?;
        tracing::info!(user_id = %user.id, "Email verified");

        if let Err(e) = self
            .email_notifier
            .send_welcome_email(&user.email, &user.name)
            .await
        {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to send welcome email");
        }

        Ok(VerifyEmailOutput {
            user_id: user.id,
            email: user.email,
            message: VERIFIED_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::user_query::{MockUserQuery, UserQueryResult};
    use crate::auth::application::ports::outgoing::user_repository::MockUserRepository;
    use crate::email::application::ports::outgoing::user_email_notifier::{
        MockUserEmailNotifier, UserEmailNotificationError,
    };

    fn user_created(hours_ago: i64) -> UserQueryResult {
        let created = Utc::now() - Duration::hours(hours_ago);
        UserQueryResult {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
            email_verified_at: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn query_returning(user: Option<UserQueryResult>) -> MockUserQuery {
        let mut query = MockUserQuery::new();
        query
            .expect_find_by_verification_token_hash()
            .withf(|hash| hash == hash_token("raw-token"))
            .returning(move |_| Ok(user.clone()));
        query
    }

    #[tokio::test]
    async fn test_verify_success_sends_welcome() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_mark_email_verified()
            .times(1)
            .returning(|_| Ok(()));

        let mut notifier = MockUserEmailNotifier::new();
        notifier
            .expect_send_welcome_email()
            .withf(|to, name| to == "jane@example.com" && name == "Jane")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = VerifyUserEmailUseCase::new(
            query_returning(Some(user_created(1))),
            repository,
            Arc::new(notifier),
        );

        let output = use_case.execute("raw-token").await.unwrap();
        assert_eq!(output.email, "jane@example.com");
        assert_eq!(output.message, VERIFIED_MESSAGE);
    }

    #[tokio::test]
    async fn test_welcome_failure_does_not_fail_verification() {
        let mut repository = MockUserRepository::new();
        repository.expect_mark_email_verified().returning(|_| Ok(()));

        let mut notifier = MockUserEmailNotifier::new();
        notifier.expect_send_welcome_email().returning(|_, _| {
            Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp".to_string(),
            ))
        });

        let use_case = VerifyUserEmailUseCase::new(
            query_returning(Some(user_created(1))),
            repository,
            Arc::new(notifier),
        );

        assert!(use_case.execute("raw-token").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_token() {
        let use_case = VerifyUserEmailUseCase::new(
            MockUserQuery::new(),
            MockUserRepository::new(),
            Arc::new(MockUserEmailNotifier::new()),
        );

        assert!(matches!(
            use_case.execute("  ").await,
            Err(VerifyEmailError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let use_case = VerifyUserEmailUseCase::new(
            query_returning(None),
            MockUserRepository::new(),
            Arc::new(MockUserEmailNotifier::new()),
        );

        assert!(matches!(
            use_case.execute("raw-token").await,
            Err(VerifyEmailError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_token_older_than_window() {
        let use_case = VerifyUserEmailUseCase::new(
            query_returning(Some(user_created(25))),
            MockUserRepository::new(),
            Arc::new(MockUserEmailNotifier::new()),
        );

        assert!(matches!(
            use_case.execute("raw-token").await,
            Err(VerifyEmailError::TokenExpired)
        ));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        type UseCase = VerifyUserEmailUseCase<MockUserQuery, MockUserRepository>;
        assert!(!UseCase::is_expired(now - Duration::hours(24), now));
        assert!(UseCase::is_expired(
            now - Duration::hours(24) - Duration::seconds(1),
            now
        ));
    }
}
