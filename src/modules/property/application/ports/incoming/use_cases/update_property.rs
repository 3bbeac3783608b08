use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::property::application::ports::outgoing::property_query::PropertyView;
use crate::modules::property::application::ports::outgoing::property_repository::UpdatePropertyData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Invalid property: {0}")]
    Validation(String),

    #[error("Amenity not found: {0}")]
    AmenityNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePropertyUseCase: Send + Sync {
    async fn execute(
        &self,
        property_id: Uuid,
        data: UpdatePropertyData,
    ) -> Result<PropertyView, UpdatePropertyError>;
}
