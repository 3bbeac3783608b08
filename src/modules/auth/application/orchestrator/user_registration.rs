use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;

const MAX_EMAIL_ATTEMPTS: u32 = 3;

pub const REGISTRATION_MESSAGE: &str =
    "Account created successfully. Please check your email to verify your account.";

#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub user_id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub message: String,
}

impl From<CreateUserOutput> for UserRegistrationOutput {
    fn from(output: CreateUserOutput) -> Self {
        Self {
            user_id: output.user_id,
            name: output.name,
            email: output.email,
            role: output.role,
            message: REGISTRATION_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),
}

/// Creates the account, then sends the verification email in the background.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            email_service,
        }
    }

    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created_user = self.create_user_use_case.execute(input).await?;

        let email_service = self.email_service.clone();
        let user_for_email = created_user.clone();

        tokio::spawn(async move {
            for attempt in 1..=MAX_EMAIL_ATTEMPTS {
                match email_service
                    .send_verification_email(
                        &user_for_email.email,
                        &user_for_email.name,
                        &user_for_email.verification_token,
                    )
                    .await
                {
                    Ok(_) => return,
                    Err(e) if attempt < MAX_EMAIL_ATTEMPTS => {
                        tracing::warn!(
                            user_id = %user_for_email.user_id,
                            attempt,
                            error = %e,
                            "Verification email failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            user_id = %user_for_email.user_id,
                            error = %e,
                            "All {} verification email attempts failed",
                            MAX_EMAIL_ATTEMPTS
                        );
                    }
                }
            }
        });

        Ok(created_user.into())
    }
}
