use async_trait::async_trait;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    ListInquiriesError, ListInquiriesUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::{InquiryQuery, InquiryView};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListInquiriesService<Q>
where
    Q: InquiryQuery,
{
    query: Q,
}

impl<Q> ListInquiriesService<Q>
where
    Q: InquiryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListInquiriesUseCase for ListInquiriesService<Q>
where
    Q: InquiryQuery + Send + Sync,
{
    async fn execute(
        &self,
        status: Option<InquiryStatus>,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, ListInquiriesError> {
        self.query
            .list(status, page)
            .await
            .map_err(|e| ListInquiriesError::QueryFailed(e.to_string()))
    }
}
