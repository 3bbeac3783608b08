use async_trait::async_trait;

use crate::modules::amenity::application::ports::outgoing::{AmenityView, NewAmenity};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAmenityError {
    #[error("Invalid amenity: {0}")]
    Validation(String),

    #[error("Amenity with this name already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAmenityUseCase: Send + Sync {
    async fn execute(&self, amenity: NewAmenity) -> Result<AmenityView, CreateAmenityError>;
}
