use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};
use crate::email::application::templates::{self, EmailContent};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Renders account emails and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_url: impl Into<String>) -> Self {
        Self {
            sender,
            app_url: app_url.into(),
        }
    }

    async fn deliver(&self, to: &str, content: EmailContent) -> Result<(), UserEmailNotificationError> {
        self.sender
            .send_email(to, &content.subject, &content.html)
            .await
            .map_err(|e| UserEmailNotificationError::EmailSendingFailed(e.to_string()))
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.deliver(to, templates::verification_email(&self.app_url, name, token))
            .await
    }

    async fn send_welcome_email(
        &self,
        to: &str,
        name: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.deliver(to, templates::welcome_email(&self.app_url, name))
            .await
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.deliver(to, templates::password_reset_email(&self.app_url, name, token))
            .await
    }
}
