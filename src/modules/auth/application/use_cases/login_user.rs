use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserQueryError,
};
use email_address::EmailAddress;

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        Ok(Self { email, password })
    }

    /// Lower-cased and trimmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    // Passwords are compared verbatim; only emptiness is checked here.
    fn validate_password(password: String) -> Result<String, LoginRequestError> {
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(password)
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    EmailNotVerified,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::EmailNotVerified => {
                write!(f, "Please verify your email before signing in")
            }
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<UserQueryError> for LoginError {
    fn from(e: UserQueryError) -> Self {
        LoginError::QueryError(e.to_string())
    }
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub email_verified: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let is_verified = user.is_verified();
        if user.role.requires_verified_email() && !is_verified {
            return Err(LoginError::EmailNotVerified);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role, is_verified)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role, is_verified)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            access_token,
            refresh_token,
            user: UserInfo {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
                email_verified: is_verified,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::password_hasher::MockPasswordHasher;
    use crate::auth::application::ports::outgoing::user_query::{MockUserQuery, UserQueryResult};
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    // ==================== LoginRequest Tests ====================
    #[test]
    fn test_login_request_email_normalized() {
        let request =
            LoginRequest::new("  Test@Example.COM  ".to_string(), "password123".to_string())
                .unwrap();

        assert_eq!(request.email(), "test@example.com");
        assert_eq!(request.password(), "password123");
    }

    #[test]
    fn test_login_request_keeps_password_whitespace() {
        let request =
            LoginRequest::new("a@example.com".to_string(), " pass word ".to_string()).unwrap();
        assert_eq!(request.password(), " pass word ");
    }

    #[test]
    fn test_login_request_validation_errors() {
        assert!(matches!(
            LoginRequest::new("".to_string(), "pw".to_string()),
            Err(LoginRequestError::EmptyEmail)
        ));
        assert!(matches!(
            LoginRequest::new("invalid-email".to_string(), "pw".to_string()),
            Err(LoginRequestError::InvalidEmailFormat)
        ));
        assert!(matches!(
            LoginRequest::new("a@example.com".to_string(), "".to_string()),
            Err(LoginRequestError::EmptyPassword)
        ));
    }

    #[test]
    fn test_login_request_deserialize() {
        let ok: LoginRequest =
            serde_json::from_value(json!({"email": "a@example.com", "password": "x"})).unwrap();
        assert_eq!(ok.email(), "a@example.com");

        let bad: Result<LoginRequest, _> =
            serde_json::from_value(json!({"email": "nope", "password": "x"}));
        assert!(bad.is_err());
    }

    // ==================== LoginUserUseCase Tests ====================
    fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "premier-deals".to_string(),
            access_token_expiry: 1800,
            refresh_token_expiry: 604800,
        }))
    }

    fn user(role: UserRole, verified: bool) -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            password_hash: "hashed_password".to_string(),
            role,
            email_verified_at: verified.then(Utc::now),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn query_with(found: Option<UserQueryResult>) -> MockUserQuery {
        let mut query = MockUserQuery::new();
        query
            .expect_find_by_email()
            .returning(move |_| Ok(found.clone()));
        query
    }

    fn hasher(valid: bool) -> Arc<MockPasswordHasher> {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify_password()
            .returning(move |_, _| Ok(valid));
        Arc::new(hasher)
    }

    fn request() -> LoginRequest {
        LoginRequest::new("test@example.com".to_string(), "password123".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_login_success() {
        let provider = token_provider();
        let use_case = LoginUserUseCase::new(
            query_with(Some(user(UserRole::User, true))),
            hasher(true),
            provider.clone(),
        );

        let response = use_case.execute(request()).await.unwrap();

        assert_eq!(response.user.email, "test@example.com");
        assert_eq!(response.user.role, UserRole::User);
        assert!(response.user.email_verified);

        let claims = provider.verify_token(&response.access_token).unwrap();
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.role, UserRole::User);
        let claims = provider.verify_token(&response.refresh_token).unwrap();
        assert_eq!(claims.token_type, "refresh");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let use_case = LoginUserUseCase::new(query_with(None), hasher(true), token_provider());

        assert!(matches!(
            use_case.execute(request()).await,
            Err(LoginError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let use_case = LoginUserUseCase::new(
            query_with(Some(user(UserRole::User, true))),
            hasher(false),
            token_provider(),
        );

        assert!(matches!(
            use_case.execute(request()).await,
            Err(LoginError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_unverified_user_rejected() {
        let use_case = LoginUserUseCase::new(
            query_with(Some(user(UserRole::User, false))),
            hasher(true),
            token_provider(),
        );

        assert!(matches!(
            use_case.execute(request()).await,
            Err(LoginError::EmailNotVerified)
        ));
    }

    #[tokio::test]
    async fn test_login_unverified_staff_allowed() {
        for role in [UserRole::Admin, UserRole::Realtor] {
            let use_case = LoginUserUseCase::new(
                query_with(Some(user(role, false))),
                hasher(true),
                token_provider(),
            );

            let response = use_case.execute(request()).await.unwrap();
            assert_eq!(response.user.role, role);
            assert!(!response.user.email_verified);
        }
    }

    #[tokio::test]
    async fn test_login_query_error() {
        let mut query = MockUserQuery::new();
        query
            .expect_find_by_email()
            .returning(|_| Err(UserQueryError::DatabaseError("down".to_string())));
        let use_case = LoginUserUseCase::new(query, hasher(true), token_provider());

        assert!(matches!(
            use_case.execute(request()).await,
            Err(LoginError::QueryError(_))
        ));
    }

    #[test]
    fn test_login_error_display() {
        assert_eq!(
            LoginError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            LoginError::EmailNotVerified.to_string(),
            "Please verify your email before signing in"
        );
    }
}
