use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::email::application::ports::outgoing::EmailSender;
use crate::email::application::templates::{self, ContactDetails};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessage, SendContactMessageError, SendContactMessageUseCase,
};
use crate::shared::validation::{is_valid_email, non_blank};

#[derive(Clone)]
pub struct SendContactMessageService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    admin_email: String,
}

impl SendContactMessageService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, admin_email: impl Into<String>) -> Self {
        Self {
            sender,
            admin_email: admin_email.into(),
        }
    }
}

fn normalize(mut msg: ContactMessage) -> Result<ContactMessage, SendContactMessageError> {
    for value in [
        &mut msg.first_name,
        &mut msg.last_name,
        &mut msg.email,
        &mut msg.subject,
        &mut msg.message,
    ] {
        *value = value.trim().to_string();
        if value.is_empty() {
            return Err(SendContactMessageError::Validation(
                "firstName, lastName, email, subject, and message are required".to_string(),
            ));
        }
    }

    if !is_valid_email(&msg.email) {
        return Err(SendContactMessageError::InvalidEmail);
    }
    msg.phone = non_blank(msg.phone);

    Ok(msg)
}

#[async_trait]
impl SendContactMessageUseCase for SendContactMessageService {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError> {
        let msg = normalize(message)?;

        let admin = templates::contact_admin_email(&ContactDetails {
            first_name: &msg.first_name,
            last_name: &msg.last_name,
            email: &msg.email,
            phone: msg.phone.as_deref(),
            subject: &msg.subject,
            message: &msg.message,
        });
        let confirmation = templates::contact_confirmation_email(&msg.first_name, &msg.subject);

        tokio::try_join!(
            self.sender
                .send_email(&self.admin_email, &admin.subject, &admin.html),
            self.sender
                .send_email(&msg.email, &confirmation.subject, &confirmation.html),
        )
        .map_err(|e| SendContactMessageError::EmailSendFailed(e.to_string()))?;

        info!(from = %msg.email, "Contact message delivered");
        Ok(())
    }
}
