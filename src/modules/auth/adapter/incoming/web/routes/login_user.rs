use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,

    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "Jane Doe")]
    name: String,

    #[schema(example = "jane@example.com")]
    email: String,

    #[schema(example = "USER")]
    role: String,

    #[schema(example = true)]
    email_verified: bool,
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "name": "Jane Doe",
                        "email": "jane@example.com",
                        "role": "USER",
                        "emailVerified": true
                    }
                }
            })
        ),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (
            status = 403,
            description = "Email not verified",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_NOT_VERIFIED",
                    "message": "Please verify your email before signing in"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                role = %response.user.role,
                "User logged in successfully"
            );

            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
                user: LoginUserInfo {
                    id: response.user.id.to_string(),
                    name: response.user.name,
                    email: response.user.email,
                    role: response.user.role.to_string(),
                    email_verified: response.user.email_verified,
                },
            })
        }

        Err(e @ LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &e.to_string())
        }

        Err(e @ LoginError::EmailNotVerified) => {
            warn!("Login failed: Email not verified");
            ApiResponse::forbidden("EMAIL_NOT_VERIFIED", &e.to_string())
        }

        Err(ref e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
