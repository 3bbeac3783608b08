use actix_web::{get, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::property_response::{PropertyListResponse, PropertyResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::property::application::ports::incoming::use_cases::GetPropertiesError;
use crate::modules::property::application::ports::outgoing::property_query::PropertyListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::shared::validation::non_blank;
use crate::AppState;

pub const DEFAULT_PROPERTY_PAGE_SIZE: u64 = 12;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

/// Every parameter is optional. Values that do not parse are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetPropertiesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    /// SALE, RENT or LAND
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    /// ACTIVE, PENDING, SOLD or RENTED
    pub status: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub city: Option<String>,
    /// Only `true` has an effect.
    pub featured: Option<String>,
    pub search: Option<String>,
}

impl GetPropertiesQuery {
    pub fn into_parts(self) -> (PropertyListFilter, PageRequest) {
        let page = PageRequest::new(
            parse(&self.page),
            parse(&self.limit),
            DEFAULT_PROPERTY_PAGE_SIZE,
        );

        let filter = PropertyListFilter {
            property_type: parse(&self.property_type),
            status: parse(&self.status),
            min_price: parse::<Decimal>(&self.min_price),
            max_price: parse::<Decimal>(&self.max_price),
            min_bedrooms: parse(&self.bedrooms),
            min_bathrooms: parse(&self.bathrooms),
            city: non_blank(self.city),
            featured_only: self.featured.as_deref() == Some("true"),
            search: non_blank(self.search),
        };

        (filter, page)
    }
}

fn parse<T: std::str::FromStr>(value: &Option<String>) -> Option<T> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List properties
///
/// Featured listings come first, then newest first.
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "properties",
    params(GetPropertiesQuery),
    responses(
        (status = 200, description = "Page of listings", body = inline(SuccessResponse<PropertyListResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/properties")]
pub async fn get_properties_handler(
    query: web::Query<GetPropertiesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into_parts();

    match data.property.list.execute(filter, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::success(PropertyListResponse {
                properties: result.items.into_iter().map(PropertyResponse::from).collect(),
                pagination,
            })
        }
        Err(GetPropertiesError::QueryFailed(msg)) => {
            error!("Failed to list properties: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
