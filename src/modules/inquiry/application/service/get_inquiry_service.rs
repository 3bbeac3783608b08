use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::inquiry::application::ports::incoming::use_cases::{
    GetInquiryError, GetInquiryUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryQuery, InquiryQueryError, InquiryView,
};

pub struct GetInquiryService<Q>
where
    Q: InquiryQuery,
{
    query: Q,
}

impl<Q> GetInquiryService<Q>
where
    Q: InquiryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetInquiryUseCase for GetInquiryService<Q>
where
    Q: InquiryQuery + Send + Sync,
{
    async fn execute(&self, inquiry_id: Uuid) -> Result<InquiryView, GetInquiryError> {
        self.query
            .get_by_id(inquiry_id)
            .await
            .map_err(|e| match e {
                InquiryQueryError::NotFound => GetInquiryError::NotFound,
                InquiryQueryError::DatabaseError(msg) => GetInquiryError::QueryFailed(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::inquiry::application::domain::entities::InquiryStatus;
    use crate::modules::inquiry::application::ports::outgoing::inquiry_query::MockInquiryQuery;
    use crate::tests::support::fixtures::inquiry_view;

    #[tokio::test]
    async fn test_found() {
        let mut query = MockInquiryQuery::new();
        query
            .expect_get_by_id()
            .returning(|id| Ok(inquiry_view(id, InquiryStatus::OfferMade)));

        let id = Uuid::new_v4();
        let view = GetInquiryService::new(query).execute(id).await.unwrap();

        assert_eq!(view.id, id);
    }

    #[tokio::test]
    async fn test_not_found() {
        let mut query = MockInquiryQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(InquiryQueryError::NotFound));

        let result = GetInquiryService::new(query).execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetInquiryError::NotFound)));
    }
}
