use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::token::{generate_token, hash_token};
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::shared::validation::is_valid_email;

pub const RESET_TOKEN_TTL_MINUTES: i64 = 60;

/// Returned whether or not the account exists.
pub const FORGOT_PASSWORD_MESSAGE: &str =
    "If an account with this email exists, a password reset link has been sent.";

pub const RESET_PASSWORD_MESSAGE: &str =
    "Password has been reset successfully. You can now sign in with your new password.";

#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordResetError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Reset token is required")]
    MissingToken,

    #[error("Invalid or expired reset token")]
    InvalidToken,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Failed to send password reset email: {0}")]
    EmailSendFailed(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] UserRepositoryError),
}

#[async_trait]
pub trait IForgotPasswordUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<String, PasswordResetError>;
}

#[async_trait]
pub trait IValidateResetTokenUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), PasswordResetError>;
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, token: &str, new_password: &str) -> Result<String, PasswordResetError>;
}

fn non_empty_token(token: &str) -> Result<&str, PasswordResetError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(PasswordResetError::MissingToken);
    }
    Ok(token)
}

// ============================ Forgot Password =============================
pub struct ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> ForgotPasswordUseCase<Q, R>
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
}

#[async_trait]
impl<Q, R> IForgotPasswordUseCase for ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<String, PasswordResetError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(PasswordResetError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(PasswordResetError::InvalidEmail);
        }

        let Some(user) = self.query.find_by_email(&email.to_lowercase()).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(FORGOT_PASSWORD_MESSAGE.to_string());
        };

        let token = generate_token();
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);
        self.repository
            .set_reset_token(user.id, hash_token(&token), expires_at)
            .await?;

        self.email_notifier
            .send_password_reset_email(&user.email, &user.name, &token)
            .await
            .map_err(|e| PasswordResetError::EmailSendFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Password reset email sent");
        Ok(FORGOT_PASSWORD_MESSAGE.to_string())
    }
}

// ============================ Validate Reset Token =============================
pub struct ValidateResetTokenUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> ValidateResetTokenUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IValidateResetTokenUseCase for ValidateResetTokenUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<(), PasswordResetError> {
        let token = non_empty_token(token)?;

        self.query
            .find_by_reset_token_hash(&hash_token(token), Utc::now())
            .await?
            .map(|_| ())
            .ok_or(PasswordResetError::InvalidToken)
    }
}

// ============================ Reset Password =============================
pub struct ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, token: &str, new_password: &str) -> Result<String, PasswordResetError> {
        let token = non_empty_token(token)?;
        self.password_policy
            .validate(new_password)
            .map_err(|e| PasswordResetError::InvalidPassword(e.to_string()))?;

        let user = self
            .query
            .find_by_reset_token_hash(&hash_token(token), Utc::now())
            .await?
            .ok_or(PasswordResetError::InvalidToken)?;

        let password_hash = self
            .password_hasher
            .hash_password(new_password)
            .await
            .map_err(|e| PasswordResetError::HashingFailed(e.to_string()))?;

        self.repository.reset_password(user.id, password_hash).await?;

        tracing::info!(user_id = %user.id, "Password reset completed");
        Ok(RESET_PASSWORD_MESSAGE.to_string())
    }
}
