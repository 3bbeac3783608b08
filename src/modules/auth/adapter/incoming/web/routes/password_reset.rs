use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::password_reset::PasswordResetError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[schema(example = "jane@example.com")]
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize, IntoParams)]
pub struct ResetTokenQuery {
    pub token: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: String,

    #[schema(example = "newSecret123")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidateResetTokenResponse {
    valid: bool,
}

fn map_password_reset_error(err: PasswordResetError) -> HttpResponse {
    match &err {
        PasswordResetError::MissingEmail => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        PasswordResetError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }
        PasswordResetError::MissingToken => {
            ApiResponse::bad_request("MISSING_TOKEN", &err.to_string())
        }
        PasswordResetError::InvalidToken => {
            warn!("Password reset with invalid or expired token");
            ApiResponse::bad_request("INVALID_TOKEN", &err.to_string())
        }
        PasswordResetError::InvalidPassword(msg) => {
            ApiResponse::bad_request("INVALID_PASSWORD", msg)
        }
        PasswordResetError::EmailSendFailed(e) => {
            error!(error = %e, "Password reset email could not be sent");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_SEND_FAILED",
                "Failed to send password reset email. Please try again later.",
            )
        }
        other => {
            error!(error = %other, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}

/// Request a password reset link
///
/// Unknown addresses get the same response as known ones.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset link sent if the account exists", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Missing or malformed email", body = ErrorResponse),
        (status = 500, description = "Email could not be sent", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.forgot_password.execute(&req.email).await {
        Ok(message) => ApiResponse::success(MessageResponse { message }),
        Err(e) => map_password_reset_error(e),
    }
}

/// Check whether a reset token is still usable
#[utoipa::path(
    get,
    path = "/api/auth/reset-password/validate",
    tag = "auth",
    params(ResetTokenQuery),
    responses(
        (status = 200, description = "Token is valid", body = inline(SuccessResponse<ValidateResetTokenResponse>)),
        (status = 400, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/auth/reset-password/validate")]
pub async fn validate_reset_token_handler(
    query: web::Query<ResetTokenQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = query.token.as_deref().unwrap_or_default();

    match data.auth.validate_reset_token.execute(token).await {
        Ok(()) => ApiResponse::success(ValidateResetTokenResponse { valid: true }),
        Err(e) => map_password_reset_error(e),
    }
}

/// Set a new password with a reset token
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Invalid token or password", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .reset_password
        .execute(&req.token, &req.password)
        .await
    {
        Ok(message) => {
            info!("Password reset completed");
            ApiResponse::success(MessageResponse { message })
        }
        Err(e) => map_password_reset_error(e),
    }
}
