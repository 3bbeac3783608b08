use actix_web::{get, web, Responder};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::dashboard::application::domain::stats::DashboardStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_properties: u64,
    pub total_inquiries: u64,
    /// Estimated, 120 per listing.
    pub total_views: u64,
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
    pub properties_this_month: u64,
    pub inquiries_this_month: u64,
    pub views_this_month: u64,
    #[schema(value_type = f64)]
    pub revenue_this_month: Decimal,
    pub active_properties: u64,
    pub pending_inquiries: u64,
    pub conversion_rate: f64,
    /// Hours.
    pub avg_response_time: f64,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(s: DashboardStats) -> Self {
        Self {
            total_properties: s.total_properties,
            total_inquiries: s.total_inquiries,
            total_views: s.total_views,
            total_revenue: s.total_revenue,
            properties_this_month: s.properties_this_month,
            inquiries_this_month: s.inquiries_this_month,
            views_this_month: s.views_this_month,
            revenue_this_month: s.revenue_this_month,
            active_properties: s.active_properties,
            pending_inquiries: s.pending_inquiries,
            conversion_rate: s.conversion_rate,
            avg_response_time: s.avg_response_time,
        }
    }
}

/// Headline figures for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard figures", body = inline(SuccessResponse<DashboardStatsResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/dashboard/stats")]
pub async fn get_dashboard_stats_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.stats.execute().await {
        Ok(stats) => ApiResponse::success(DashboardStatsResponse::from(stats)),
        Err(e) => {
            error!("Failed to compute dashboard stats: {}", e);
            ApiResponse::internal_error()
        }
    }
}
