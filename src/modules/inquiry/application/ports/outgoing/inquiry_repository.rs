use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InquiryRepositoryError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Property not found")]
    PropertyNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Stores the inquiry with status `NEW` and returns its id.
    async fn create(&self, inquiry: NewInquiry) -> Result<Uuid, InquiryRepositoryError>;

    async fn update_status(
        &self,
        inquiry_id: Uuid,
        status: InquiryStatus,
    ) -> Result<(), InquiryRepositoryError>;

    async fn delete(&self, inquiry_id: Uuid) -> Result<(), InquiryRepositoryError>;
}
