use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::{
    adapter::incoming::web::extractors::AuthenticatedUser,
    application::use_cases::change_password::{ChangePasswordError, ChangePasswordInput},
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChangePasswordResponse {
    #[schema(example = "Password changed successfully")]
    message: String,
}

/// Change the signed-in user's password
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = "auth",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = inline(SuccessResponse<ChangePasswordResponse>)),
        (status = 400, description = "New password rejected by policy", body = ErrorResponse),
        (
            status = 401,
            description = "Wrong current password or missing token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Current password is incorrect" }
            })
        ),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/auth/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = ChangePasswordInput {
        user_id: user.user_id.into(),
        current_password: req.current_password,
        new_password: req.new_password,
    };

    match data.auth.change_password.execute(input).await {
        Ok(()) => ApiResponse::success(ChangePasswordResponse {
            message: "Password changed successfully".to_string(),
        }),
        Err(e @ ChangePasswordError::WrongCurrentPassword) => {
            warn!(user_id = %user.user_id, "Password change with wrong current password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &e.to_string())
        }
        Err(ChangePasswordError::InvalidPassword(msg)) => {
            ApiResponse::bad_request("INVALID_PASSWORD", &msg)
        }
        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
