use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::logout_user::{LogoutError, LogoutRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequestDto {
    /// Refresh token to revoke
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Sign out and revoke the refresh token
///
/// The body is optional. Revocation failures are logged and the call still succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body(content = LogoutRequestDto, description = "Optional", content_type = "application/json"),
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    req: Option<web::Json<LogoutRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req
        .map(|r| r.into_inner())
        .unwrap_or_else(|| LogoutRequest::new(None));

    info!(user_id = %user.user_id, "User logout attempt");

    match data.auth.logout.execute(user.user_id, request).await {
        Ok(response) => {
            info!(user_id = %user.user_id, "User logged out successfully");
            ApiResponse::success(LogoutResponseBody {
                message: response.message,
            })
        }

        Err(LogoutError::TokenRevocationFailed(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Token revocation failed during logout");
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out successfully".to_string(),
            })
        }
    }
}
