use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::analytics::{
    InquiryAnalytics, StatusShare, TopProperty, TrendPoint,
};
use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryImageView, InquiryPropertyView, InquiryView,
};
use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
use crate::shared::pagination::Pagination;

//
// ──────────────────────────────────────────────────────────
// Property summaries
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryImageResponse {
    pub url: String,
    pub is_primary: bool,
}

impl From<InquiryImageView> for InquiryImageResponse {
    fn from(view: InquiryImageView) -> Self {
        Self {
            url: view.url,
            is_primary: view.is_primary,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPropertySummary {
    pub id: Uuid,
    pub title: String,
    pub images: Vec<InquiryImageResponse>,
}

impl From<InquiryPropertyView> for InquiryPropertySummary {
    fn from(view: InquiryPropertyView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            images: view.images.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPropertyDetail {
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub address: String,
    pub city: String,
    pub state: String,
    pub images: Vec<InquiryImageResponse>,
}

impl From<InquiryPropertyView> for InquiryPropertyDetail {
    fn from(view: InquiryPropertyView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            price: view.price,
            property_type: view.property_type,
            status: view.status,
            address: view.address,
            city: view.city,
            state: view.state,
            images: view.images.into_iter().map(Into::into).collect(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Inquiries
// ──────────────────────────────────────────────────────────
//

/// Inquiry with a short property summary, used by create and list.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub property_id: Uuid,
    pub property: InquiryPropertySummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InquiryView> for InquiryResponse {
    fn from(view: InquiryView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            email: view.email,
            phone: view.phone,
            message: view.message,
            status: view.status,
            property_id: view.property.id,
            property: view.property.into(),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

/// Inquiry with the detailed property summary, used by get and update.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub property_id: Uuid,
    pub property: InquiryPropertyDetail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InquiryView> for InquiryDetailResponse {
    fn from(view: InquiryView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            email: view.email,
            phone: view.phone,
            message: view.message,
            status: view.status,
            property_id: view.property.id,
            property: view.property.into(),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryListResponse {
    pub inquiries: Vec<InquiryResponse>,
    pub pagination: Pagination,
}

//
// ──────────────────────────────────────────────────────────
// Analytics
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopPropertyResponse {
    pub property_id: Uuid,
    pub property_title: String,
    pub inquiry_count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusShareResponse {
    pub status: InquiryStatus,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrendPointResponse {
    #[schema(example = "Mar")]
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryAnalyticsResponse {
    pub total_inquiries: u64,
    pub new_inquiries: u64,
    pub contacted_inquiries: u64,
    pub viewing_scheduled: u64,
    pub offer_made: u64,
    pub closed_inquiries: u64,
    pub spam_inquiries: u64,
    /// Closed over total, in percent.
    pub conversion_rate: f64,
    /// Hours.
    pub avg_response_time: f64,
    pub inquiries_this_month: u64,
    pub inquiries_last_month: u64,
    pub top_properties: Vec<TopPropertyResponse>,
    pub status_distribution: Vec<StatusShareResponse>,
    /// Oldest month first.
    pub monthly_trend: Vec<TrendPointResponse>,
}

impl From<TopProperty> for TopPropertyResponse {
    fn from(top: TopProperty) -> Self {
        Self {
            property_id: top.property_id,
            property_title: top.title,
            inquiry_count: top.inquiry_count,
        }
    }
}

impl From<StatusShare> for StatusShareResponse {
    fn from(share: StatusShare) -> Self {
        Self {
            status: share.status,
            count: share.count,
            percentage: share.percentage,
        }
    }
}

impl From<TrendPoint> for TrendPointResponse {
    fn from(point: TrendPoint) -> Self {
        Self {
            month: point.month.to_string(),
            count: point.count,
        }
    }
}

impl From<InquiryAnalytics> for InquiryAnalyticsResponse {
    fn from(a: InquiryAnalytics) -> Self {
        Self {
            total_inquiries: a.total_inquiries,
            new_inquiries: a.new_inquiries,
            contacted_inquiries: a.contacted_inquiries,
            viewing_scheduled: a.viewing_scheduled,
            offer_made: a.offer_made,
            closed_inquiries: a.closed_inquiries,
            spam_inquiries: a.spam_inquiries,
            conversion_rate: a.conversion_rate,
            avg_response_time: a.avg_response_time,
            inquiries_this_month: a.inquiries_this_month,
            inquiries_last_month: a.inquiries_last_month,
            top_properties: a.top_properties.into_iter().map(Into::into).collect(),
            status_distribution: a.status_distribution.into_iter().map(Into::into).collect(),
            monthly_trend: a.monthly_trend.into_iter().map(Into::into).collect(),
        }
    }
}
