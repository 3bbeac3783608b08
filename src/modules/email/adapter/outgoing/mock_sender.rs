use crate::email::application::ports::outgoing::email_sender::{EmailSender, EmailSenderError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Records every message instead of sending it.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<(String, String, String)>>>,
    fail_for: Option<String>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails any send addressed to `recipient`.
    pub fn failing_for(recipient: &str) -> Self {
        Self {
            fail_for: Some(recipient.to_string()),
            ..Self::default()
        }
    }

    pub fn get_sent_emails(&self) -> Vec<(String, String, String)> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailSenderError> {
        if self.fail_for.as_deref() == Some(to) {
            return Err(EmailSenderError::Transport("connection refused".to_string()));
        }
        self.sent_emails
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), html.to_string()));
        Ok(())
    }
}
