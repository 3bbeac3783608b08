use async_trait::async_trait;

use crate::modules::property::application::ports::outgoing::property_query::PropertyView;
use crate::modules::property::application::ports::outgoing::property_repository::CreatePropertyData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePropertyError {
    #[error("Invalid property: {0}")]
    Validation(String),

    #[error("Amenity not found: {0}")]
    AmenityNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePropertyUseCase: Send + Sync {
    async fn execute(&self, data: CreatePropertyData) -> Result<PropertyView, CreatePropertyError>;
}
