use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::amenity_response::AmenityResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::amenity::application::ports::incoming::use_cases::CreateAmenityError;
use crate::modules::amenity::application::ports::outgoing::NewAmenity;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAmenityRequest {
    #[schema(example = "Wine Cellar")]
    pub name: String,
    #[schema(example = "Interior")]
    pub category: String,
    pub icon: Option<String>,
}

/// Create an amenity (admin only)
#[utoipa::path(
    post,
    path = "/api/amenities",
    tag = "amenities",
    request_body = CreateAmenityRequest,
    responses(
        (status = 201, description = "Amenity created", body = inline(SuccessResponse<AmenityResponse>)),
        (status = 400, description = "Name or category missing", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/amenities")]
pub async fn create_amenity_handler(
    user: AdminUser,
    req: web::Json<CreateAmenityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let amenity = NewAmenity {
        name: req.name,
        category: req.category,
        icon: req.icon,
    };

    match data.amenity.create.execute(amenity).await {
        Ok(view) => ApiResponse::created(AmenityResponse::from(view)),
        Err(CreateAmenityError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreateAmenityError::AlreadyExists) => ApiResponse::conflict(
            "AMENITY_ALREADY_EXISTS",
            "Amenity with this name already exists",
        ),
        Err(CreateAmenityError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id(), "Failed to create amenity: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::amenity::application::ports::incoming::use_cases::CreateAmenityUseCase;
    use crate::modules::amenity::application::ports::outgoing::AmenityView;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    struct MockCreate;

    #[async_trait]
    impl CreateAmenityUseCase for MockCreate {
        async fn execute(&self, amenity: NewAmenity) -> Result<AmenityView, CreateAmenityError> {
            match amenity.name.as_str() {
                "" => Err(CreateAmenityError::Validation(
                    "Name and category are required".into(),
                )),
                "Gym" => Err(CreateAmenityError::AlreadyExists),
                _ => Ok(AmenityView {
                    id: Uuid::new_v4(),
                    name: amenity.name,
                    category: amenity.category,
                    icon: amenity.icon,
                    created_at: Utc::now(),
                }),
            }
        }
    }

    async fn post(role: UserRole, payload: serde_json::Value) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_create_amenity(MockCreate)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .app_data(web::Data::new(test_token_provider()))
                .service(create_amenity_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/amenities")
            .insert_header(("Authorization", bearer(Uuid::new_v4(), role)))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_admin_creates_amenity() {
        let (status, body) = post(
            UserRole::Admin,
            json!({ "name": "Wine Cellar", "category": "Interior", "icon": "wine" }),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["name"], "Wine Cellar");
        assert_eq!(body["data"]["icon"], "wine");
    }

    #[actix_web::test]
    async fn test_realtor_is_forbidden() {
        let (status, _) = post(
            UserRole::Realtor,
            json!({ "name": "Wine Cellar", "category": "Interior" }),
        )
        .await;

        assert_eq!(status, 403);
    }

    #[actix_web::test]
    async fn test_duplicate_name_conflicts() {
        let (status, body) =
            post(UserRole::Admin, json!({ "name": "Gym", "category": "Exterior" })).await;

        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "AMENITY_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_missing_category() {
        let (status, body) = post(UserRole::Admin, json!({ "name": "Sauna" })).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
