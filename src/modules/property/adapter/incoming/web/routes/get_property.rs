use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::property_response::PropertyResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::property::application::ports::incoming::use_cases::GetPropertyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one property with its images and amenities
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "properties",
    params(("id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property found", body = inline(SuccessResponse<PropertyResponse>)),
        (status = 404, description = "Property not found", body = ErrorResponse),
    )
)]
#[get("/api/properties/{id}")]
pub async fn get_property_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let property_id = path.into_inner();

    match data.property.get.execute(property_id).await {
        Ok(view) => ApiResponse::success(PropertyResponse::from(view)),
        Err(GetPropertyError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }
        Err(GetPropertyError::QueryFailed(msg)) => {
            error!(%property_id, "Failed to fetch property: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
