use async_trait::async_trait;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::outgoing::InquiryView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListInquiriesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListInquiriesUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<InquiryStatus>,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, ListInquiriesError>;
}
