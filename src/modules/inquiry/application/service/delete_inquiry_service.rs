use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::inquiry::application::ports::incoming::use_cases::{
    DeleteInquiryError, DeleteInquiryUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryRepository, InquiryRepositoryError,
};

pub struct DeleteInquiryService<R>
where
    R: InquiryRepository,
{
    repository: R,
}

impl<R> DeleteInquiryService<R>
where
    R: InquiryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteInquiryUseCase for DeleteInquiryService<R>
where
    R: InquiryRepository + Send + Sync,
{
    async fn execute(&self, inquiry_id: Uuid) -> Result<(), DeleteInquiryError> {
        self.repository
            .delete(inquiry_id)
            .await
            .map_err(|e| match e {
                InquiryRepositoryError::NotFound => DeleteInquiryError::NotFound,
                other => DeleteInquiryError::RepositoryError(other.to_string()),
            })?;

        info!(%inquiry_id, "Inquiry deleted");
        Ok(())
    }
}
