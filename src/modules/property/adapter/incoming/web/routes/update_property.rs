use actix_web::{put, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::property_response::PropertyResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
use crate::modules::property::application::ports::incoming::use_cases::UpdatePropertyError;
use crate::modules::property::application::ports::outgoing::property_repository::UpdatePropertyData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Absent scalars keep their stored value. `imageUrls` and `amenityIds`
/// replace the current sets and default to empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    #[schema(value_type = Option<f64>)]
    pub area: Option<Decimal>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub featured: Option<bool>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
}

impl From<UpdatePropertyRequest> for UpdatePropertyData {
    fn from(r: UpdatePropertyRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            price: r.price,
            property_type: r.property_type,
            status: r.status,
            bedrooms: r.bedrooms,
            bathrooms: r.bathrooms,
            area: r.area,
            address: r.address,
            city: r.city,
            state: r.state,
            zip_code: r.zip_code,
            country: r.country,
            latitude: r.latitude,
            longitude: r.longitude,
            featured: r.featured,
            image_urls: r.image_urls,
            amenity_ids: r.amenity_ids,
        }
    }
}

/// Update a property (staff only)
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = "properties",
    params(("id" = Uuid, Path, description = "Property id")),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Property updated", body = inline(SuccessResponse<PropertyResponse>)),
        (status = 400, description = "Invalid fields or unknown amenity", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/properties/{id}")]
pub async fn update_property_handler(
    user: StaffUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePropertyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let property_id = path.into_inner();

    match data
        .property
        .update
        .execute(property_id, req.into_inner().into())
        .await
    {
        Ok(view) => ApiResponse::success(PropertyResponse::from(view)),
        Err(UpdatePropertyError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }
        Err(UpdatePropertyError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(UpdatePropertyError::AmenityNotFound(id)) => {
            ApiResponse::bad_request("AMENITY_NOT_FOUND", &format!("Amenity {id} does not exist"))
        }
        Err(UpdatePropertyError::RepositoryError(msg)) => {
            error!(%property_id, user_id = %user.user_id(), "Failed to update property: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
