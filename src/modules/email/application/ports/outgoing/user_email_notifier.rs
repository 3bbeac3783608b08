use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Account lifecycle emails. Tokens are the raw values that end up in links.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_welcome_email(
        &self,
        to: &str,
        name: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
