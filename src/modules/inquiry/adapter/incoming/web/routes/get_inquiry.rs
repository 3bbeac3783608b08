use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::inquiry_response::InquiryDetailResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::inquiry::application::ports::incoming::use_cases::GetInquiryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one inquiry (admin only)
#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    tag = "inquiries",
    params(("id" = Uuid, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry with property details", body = inline(SuccessResponse<InquiryDetailResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/inquiries/{id}")]
pub async fn get_inquiry_handler(
    _user: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let inquiry_id = path.into_inner();

    match data.inquiry.get.execute(inquiry_id).await {
        Ok(view) => ApiResponse::success(InquiryDetailResponse::from(view)),
        Err(GetInquiryError::NotFound) => {
            ApiResponse::not_found("INQUIRY_NOT_FOUND", "Inquiry not found")
        }
        Err(GetInquiryError::QueryFailed(msg)) => {
            error!(%inquiry_id, "Failed to load inquiry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
