use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::analytics::AnalyticsSnapshot;
use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct InquiryImageView {
    pub url: String,
    pub is_primary: bool,
}

/// The property an inquiry is about. List responses only expose id, title and images.
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryPropertyView {
    pub id: Uuid,
    pub title: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub address: String,
    pub city: String,
    pub state: String,
    pub images: Vec<InquiryImageView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InquiryView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub property: InquiryPropertyView,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum InquiryQueryError {
    #[error("Inquiry not found")]
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
pub trait InquiryQuery: Send + Sync {
    async fn get_by_id(&self, inquiry_id: Uuid) -> Result<InquiryView, InquiryQueryError>;

    /// Newest first.
    async fn list(
        &self,
        status: Option<InquiryStatus>,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, InquiryQueryError>;

    async fn property_exists(&self, property_id: Uuid) -> Result<bool, InquiryQueryError>;

    /// Status totals, monthly counts since `since`, and the `top` most asked-about properties.
    async fn analytics_snapshot(
        &self,
        since: DateTime<Utc>,
        top: u64,
    ) -> Result<AnalyticsSnapshot, InquiryQueryError>;
}
