use async_trait::async_trait;

use crate::modules::inquiry::application::ports::outgoing::{InquiryView, NewInquiry};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateInquiryError {
    #[error("Invalid inquiry: {0}")]
    Validation(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Property not found")]
    PropertyNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateInquiryUseCase: Send + Sync {
    async fn execute(&self, inquiry: NewInquiry) -> Result<InquiryView, CreateInquiryError>;
}
