use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::property::application::ports::outgoing::property_query::PropertyView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPropertyUseCase: Send + Sync {
    async fn execute(&self, property_id: Uuid) -> Result<PropertyView, GetPropertyError>;
}
