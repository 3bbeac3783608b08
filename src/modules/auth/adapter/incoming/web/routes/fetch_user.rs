use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::{
    adapter::incoming::web::extractors::AuthenticatedUser,
    application::{
        domain::entities::UserId,
        use_cases::fetch_profile::{FetchUserError, UserProfileOutput},
    },
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "USER")]
    pub role: String,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfileOutput> for UserProfileResponse {
    fn from(profile: UserProfileOutput) -> Self {
        Self {
            id: profile.user_id.to_string(),
            name: profile.name,
            email: profile.email,
            role: profile.role.to_string(),
            email_verified: profile.email_verified,
            created_at: profile.created_at,
        }
    }
}

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/auth/me")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .fetch_profile
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),
        Err(FetchUserError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Database error fetching user profile");
            ApiResponse::internal_error()
        }
    }
}
