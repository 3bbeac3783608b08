use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteInquiryError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteInquiryUseCase: Send + Sync {
    async fn execute(&self, inquiry_id: Uuid) -> Result<(), DeleteInquiryError>;
}
