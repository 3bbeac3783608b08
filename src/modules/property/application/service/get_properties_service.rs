use async_trait::async_trait;

use crate::modules::property::application::ports::incoming::use_cases::{
    GetPropertiesError, GetPropertiesUseCase,
};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyListFilter, PropertyQuery, PropertyView,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct GetPropertiesService<Q>
where
    Q: PropertyQuery,
{
    query: Q,
}

impl<Q> GetPropertiesService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPropertiesUseCase for GetPropertiesService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: PropertyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PropertyView>, GetPropertiesError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| GetPropertiesError::QueryFailed(e.to_string()))
    }
}
