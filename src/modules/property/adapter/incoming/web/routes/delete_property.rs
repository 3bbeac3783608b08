use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::modules::property::application::ports::incoming::use_cases::DeletePropertyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeletePropertyResponse {
    #[schema(example = "Property deleted successfully")]
    pub message: String,
}

/// Delete a property
///
/// Images, amenity links and inquiries for the property are removed with it.
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = "properties",
    params(("id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property deleted", body = inline(SuccessResponse<DeletePropertyResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/properties/{id}")]
pub async fn delete_property_handler(
    user: StaffUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let property_id = path.into_inner();

    match data.property.delete.execute(property_id).await {
        Ok(()) => ApiResponse::success(DeletePropertyResponse {
            message: "Property deleted successfully".to_string(),
        }),
        Err(DeletePropertyError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }
        Err(DeletePropertyError::RepositoryError(msg)) => {
            error!(%property_id, user_id = %user.user_id(), "Failed to delete property: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
