use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyAmenityView, PropertyImageView, PropertyView,
};
use crate::shared::pagination::Pagination;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImageResponse {
    pub id: Uuid,
    pub url: String,
    pub alt: Option<String>,
    pub is_primary: bool,
    pub position: i32,
}

impl From<PropertyImageView> for PropertyImageResponse {
    fn from(v: PropertyImageView) -> Self {
        Self {
            id: v.id,
            url: v.url,
            alt: v.alt,
            is_primary: v.is_primary,
            position: v.position,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAmenityResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
}

impl From<PropertyAmenityView> for PropertyAmenityResponse {
    fn from(v: PropertyAmenityView) -> Self {
        Self {
            id: v.id,
            name: v.name,
            category: v.category,
            icon: v.icon,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: Uuid,
    #[schema(example = "Modern Family Home")]
    pub title: String,
    pub description: String,
    #[schema(value_type = f64, example = 850000)]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    #[schema(value_type = Option<f64>)]
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
    pub images: Vec<PropertyImageResponse>,
    pub amenities: Vec<PropertyAmenityResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PropertyView> for PropertyResponse {
    fn from(v: PropertyView) -> Self {
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
            price: v.price,
            property_type: v.property_type,
            status: v.status,
            bedrooms: v.bedrooms,
            bathrooms: v.bathrooms,
            area: v.area,
            address: v.address,
            city: v.city,
            state: v.state,
            zip_code: v.zip_code,
            country: v.country,
            latitude: v.latitude,
            longitude: v.longitude,
            featured: v.featured,
            owner_id: v.owner_id,
            images: v.images.into_iter().map(Into::into).collect(),
            amenities: v.amenities.into_iter().map(Into::into).collect(),
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyListResponse {
    pub properties: Vec<PropertyResponse>,
    pub pagination: Pagination,
}
