use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyImageView {
    pub id: Uuid,
    pub url: String,
    pub alt: Option<String>,
    pub is_primary: bool,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAmenityView {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
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
    pub owner_id: Option<Uuid>,
    /// Ordered by position.
    pub images: Vec<PropertyImageView>,
    pub amenities: Vec<PropertyAmenityView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing predicates, combined with AND. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyListFilter {
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<i32>,
    /// Case-insensitive substring on city.
    pub city: Option<String>,
    pub featured_only: bool,
    /// Case-insensitive substring on title, description, address or city.
    pub search: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PropertyQueryError {
    #[error("Property not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyQuery: Send + Sync {
    async fn get_by_id(&self, property_id: Uuid) -> Result<PropertyView, PropertyQueryError>;

    /// Featured first, then newest first.
    async fn list(
        &self,
        filter: PropertyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PropertyView>, PropertyQueryError>;
}
