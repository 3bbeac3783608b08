use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::amenity_response::AmenityResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetAmenitiesQuery {
    /// Exact category name, e.g. `Interior`.
    pub category: Option<String>,
}

/// List amenities
///
/// Public catalogue, ordered by category then name.
#[utoipa::path(
    get,
    path = "/api/amenities",
    tag = "amenities",
    params(GetAmenitiesQuery),
    responses(
        (status = 200, description = "Amenity catalogue", body = inline(SuccessResponse<Vec<AmenityResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/amenities")]
pub async fn get_amenities_handler(
    query: web::Query<GetAmenitiesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.amenity.list.execute(query.into_inner().category).await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(AmenityResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to list amenities: {}", e);
            ApiResponse::internal_error()
        }
    }
}
