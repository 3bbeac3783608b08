use actix_web::{get, web, Responder};
use tracing::error;

use super::inquiry_response::InquiryAnalyticsResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Lead pipeline analytics (admin only)
///
/// Month boundaries are calendar months in UTC.
#[utoipa::path(
    get,
    path = "/api/inquiries/analytics",
    tag = "inquiries",
    responses(
        (status = 200, description = "Inquiry analytics", body = inline(SuccessResponse<InquiryAnalyticsResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/inquiries/analytics")]
pub async fn get_inquiry_analytics_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.inquiry.analytics.execute().await {
        Ok(analytics) => ApiResponse::success(InquiryAnalyticsResponse::from(analytics)),
        Err(e) => {
            error!("Failed to compute inquiry analytics: {}", e);
            ApiResponse::internal_error()
        }
    }
}
