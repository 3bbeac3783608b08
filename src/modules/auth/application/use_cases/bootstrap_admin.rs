use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserRole,
    ports::incoming::password_policy::PasswordPolicy,
    ports::outgoing::{
        CreateUserData, HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository,
        UserRepositoryError,
    },
};

pub const ADMIN_NAME: &str = "Admin User";

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapAdminError {
    #[error("Invalid admin email")]
    InvalidEmail,

    #[error("Invalid admin password: {0}")]
    InvalidPassword(String),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] HashError),

    #[error("Query error: {0}")]
    Query(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// Creates the first ADMIN account at start-up. An existing account with the
/// same email is never touched.
pub struct BootstrapAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> BootstrapAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            policy,
        }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<BootstrapOutcome, BootstrapAdminError> {
        let email = email.trim().to_lowercase();
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(BootstrapAdminError::InvalidEmail);
        }
        self.policy
            .validate(password)
            .map_err(|e| BootstrapAdminError::InvalidPassword(e.to_string()))?;

        if self.query.find_by_email(&email).await?.is_some() {
            tracing::info!(email = %email, "Admin account already present, skipping bootstrap");
            return Ok(BootstrapOutcome::AlreadyExists);
        }

        let password_hash = self.hasher.hash_password(password).await?;

        match self
            .repository
            .create_user(CreateUserData {
                email: email.clone(),
                name: ADMIN_NAME.to_string(),
                password_hash,
                role: UserRole::Admin,
                verification_token_hash: None,
                email_verified: true,
            })
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = %user.id, email = %email, "Admin account created");
                Ok(BootstrapOutcome::Created)
            }
            // Another instance won the race.
            Err(UserRepositoryError::EmailAlreadyExists) => Ok(BootstrapOutcome::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }
}
