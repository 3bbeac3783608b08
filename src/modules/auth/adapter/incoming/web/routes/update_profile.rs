use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::{
    adapter::incoming::web::{
        extractors::AuthenticatedUser, routes::fetch_user::UserProfileResponse,
    },
    application::use_cases::update_profile::{UpdateUserError, UpdateUserInput},
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "Jane Smith")]
    pub name: String,
}

/// Update the signed-in user's name
#[utoipa::path(
    patch,
    path = "/api/auth/me",
    tag = "auth",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/auth/me")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = UpdateUserInput {
        user_id: user.user_id.into(),
        name: req.into_inner().name,
    };

    match data.auth.update_profile.execute(input).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(UserProfileResponse::from(profile))
        }
        Err(UpdateUserError::InvalidName(msg)) => ApiResponse::bad_request("INVALID_NAME", &msg),
        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ UpdateUserError::RepositoryError(_)) => {
            error!(user_id = %user.user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
