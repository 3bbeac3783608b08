use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    UpdateInquiryStatusError, UpdateInquiryStatusUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryQuery, InquiryQueryError, InquiryRepository, InquiryRepositoryError, InquiryView,
};

pub struct UpdateInquiryStatusService<R, Q>
where
    R: InquiryRepository,
    Q: InquiryQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateInquiryStatusService<R, Q>
where
    R: InquiryRepository,
    Q: InquiryQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateInquiryStatusUseCase for UpdateInquiryStatusService<R, Q>
where
    R: InquiryRepository + Send + Sync,
    Q: InquiryQuery + Send + Sync,
{
    async fn execute(
        &self,
        inquiry_id: Uuid,
        status: Option<InquiryStatus>,
    ) -> Result<InquiryView, UpdateInquiryStatusError> {
        if let Some(status) = status {
            self.repository
                .update_status(inquiry_id, status)
                .await
                .map_err(|e| match e {
                    InquiryRepositoryError::NotFound => UpdateInquiryStatusError::NotFound,
                    other => UpdateInquiryStatusError::RepositoryError(other.to_string()),
                })?;

            info!(%inquiry_id, status = %status, "Inquiry status updated");
        }

        self.query
            .get_by_id(inquiry_id)
            .await
            .map_err(|e| match e {
                InquiryQueryError::NotFound => UpdateInquiryStatusError::NotFound,
                InquiryQueryError::DatabaseError(msg) => {
                    UpdateInquiryStatusError::RepositoryError(msg)
                }
            })
    }
}
