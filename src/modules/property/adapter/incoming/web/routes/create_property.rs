use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::property_response::PropertyResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::modules::property::application::domain::entities::PropertyType;
use crate::modules::property::application::ports::incoming::use_cases::CreatePropertyError;
use crate::modules::property::application::ports::outgoing::property_repository::CreatePropertyData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[schema(example = "Modern Family Home")]
    pub title: String,
    pub description: String,
    #[schema(value_type = f64, example = 850000)]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    #[schema(value_type = Option<f64>)]
    pub area: Option<Decimal>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Defaults to USA.
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub featured: bool,
    /// Public URLs returned by `/api/upload`; the first one is the primary image.
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
}

impl CreatePropertyRequest {
    fn into_data(self, owner_id: Uuid) -> CreatePropertyData {
        CreatePropertyData {
            owner_id,
            title: self.title,
            description: self.description,
            price: self.price,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country.unwrap_or_default(),
            latitude: self.latitude,
            longitude: self.longitude,
            featured: self.featured,
            image_urls: self.image_urls,
            amenity_ids: self.amenity_ids,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a property (staff only)
///
/// The caller becomes the owner of the listing.
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property created", body = inline(SuccessResponse<PropertyResponse>)),
        (status = 400, description = "Missing or invalid fields, or unknown amenity", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/properties")]
pub async fn create_property_handler(
    user: StaffUser,
    req: web::Json<CreatePropertyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner_id = user.user_id();

    match data
        .property
        .create
        .execute(req.into_inner().into_data(owner_id))
        .await
    {
        Ok(view) => ApiResponse::created(PropertyResponse::from(view)),
        Err(CreatePropertyError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreatePropertyError::AmenityNotFound(id)) => {
            ApiResponse::bad_request("AMENITY_NOT_FOUND", &format!("Amenity {id} does not exist"))
        }
        Err(CreatePropertyError::RepositoryError(msg)) => {
            error!(user_id = %owner_id, "Failed to create property: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
