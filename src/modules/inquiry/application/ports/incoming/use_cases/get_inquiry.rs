use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::inquiry::application::ports::outgoing::InquiryView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetInquiryError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetInquiryUseCase: Send + Sync {
    async fn execute(&self, inquiry_id: Uuid) -> Result<InquiryView, GetInquiryError>;
}
