use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};
use crate::auth::application::services::token::{generate_token, hash_token};

pub const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Carries the raw verification token so the caller can email it.
#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub verification_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
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

    fn validate_name(name: &str) -> Result<String, CreateUserError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreateUserError::InvalidName("Name is required".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CreateUserError::InvalidName(format!(
                "Name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(name.to_string())
    }

    fn validate_email(email: &str) -> Result<String, CreateUserError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CreateUserError::InvalidEmail("Email is required".to_string()));
        }
        if !EmailAddress::is_valid(email) {
            return Err(CreateUserError::InvalidEmail("Invalid email format".to_string()));
        }
        Ok(email.to_lowercase())
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let name = Self::validate_name(&input.name)?;
        let email = Self::validate_email(&input.email)?;
        self.password_policy
            .validate(&input.password)
            .map_err(|e| CreateUserError::InvalidPassword(e.to_string()))?;

        if self.query.find_by_email(&email).await?.is_some() {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let verification_token = generate_token();

        let user = self
            .repository
            .create_user(CreateUserData {
                email,
                name,
                password_hash,
                role: UserRole::User,
                verification_token_hash: Some(hash_token(&verification_token)),
                email_verified: false,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration
                UserRepositoryError::EmailAlreadyExists => CreateUserError::EmailAlreadyExists,
                other => CreateUserError::RepositoryError(other),
            })?;

        Ok(CreateUserOutput {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            verification_token,
        })
    }
}
