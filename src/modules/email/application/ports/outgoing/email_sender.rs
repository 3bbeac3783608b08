use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailSenderError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Could not build message: {0}")]
    BuildFailed(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Sends a single HTML email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, html: &str)
        -> Result<(), EmailSenderError>;
}
