use async_trait::async_trait;

use super::amenity_query::AmenityView;

#[derive(Debug, Clone, PartialEq)]
pub struct NewAmenity {
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AmenityRepositoryError {
    #[error("Amenity name already exists")]
    NameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn create(&self, amenity: NewAmenity) -> Result<AmenityView, AmenityRepositoryError>;
}
