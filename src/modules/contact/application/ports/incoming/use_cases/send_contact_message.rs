use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendContactMessageError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email sending failed: {0}")]
    EmailSendFailed(String),
}

/// Notifies staff about a contact form submission and confirms receipt to the sender.
#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError>;
}
