use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePropertyData {
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<Decimal>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub featured: bool,
    /// First entry becomes the primary image.
    pub image_urls: Vec<String>,
    pub amenity_ids: Vec<Uuid>,
}

/// Scalars: `None` keeps the stored value.
/// `image_urls` / `amenity_ids` always replace the current set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePropertyData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<Decimal>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub featured: Option<bool>,
    pub image_urls: Vec<String>,
    pub amenity_ids: Vec<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyRepositoryError {
    #[error("Property not found")]
    NotFound,

    #[error("Amenity not found: {0}")]
    AmenityNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Inserts the property with its images and amenity links. Returns the new id.
    async fn create(&self, data: CreatePropertyData) -> Result<Uuid, PropertyRepositoryError>;

    async fn update(
        &self,
        property_id: Uuid,
        data: UpdatePropertyData,
    ) -> Result<(), PropertyRepositoryError>;

    async fn delete(&self, property_id: Uuid) -> Result<(), PropertyRepositoryError>;
}
