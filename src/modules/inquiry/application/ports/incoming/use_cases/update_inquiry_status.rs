use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::outgoing::InquiryView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateInquiryStatusError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateInquiryStatusUseCase: Send + Sync {
    /// `None` leaves the inquiry untouched and returns it as stored.
    async fn execute(
        &self,
        inquiry_id: Uuid,
        status: Option<InquiryStatus>,
    ) -> Result<InquiryView, UpdateInquiryStatusError>;
}
