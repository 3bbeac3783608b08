use async_trait::async_trait;

use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyListFilter, PropertyView,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPropertiesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPropertiesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PropertyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PropertyView>, GetPropertiesError>;
}
