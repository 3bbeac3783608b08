use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponseBody {
    access_token: String,
    refresh_token: String,
}

/// Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 400, description = "Missing token or wrong token type", body = ErrorResponse),
        (
            status = 401,
            description = "Expired, invalid or revoked refresh token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TOKEN_REVOKED", "message": "Refresh token has been revoked" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Token refresh attempt");

    match data.auth.refresh_token.execute(req.into_inner()).await {
        Ok(response) => {
            info!("Token refreshed successfully");
            ApiResponse::success(RefreshTokenResponseBody {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
            })
        }

        Err(e @ RefreshTokenError::TokenExpired) => {
            warn!("Token refresh failed: Token expired");
            ApiResponse::unauthorized("TOKEN_EXPIRED", &e.to_string())
        }

        Err(e @ RefreshTokenError::TokenRevoked) => {
            warn!("Token refresh failed: Token revoked");
            ApiResponse::unauthorized("TOKEN_REVOKED", &e.to_string())
        }

        Err(RefreshTokenError::TokenInvalid) | Err(RefreshTokenError::InvalidSignature) => {
            warn!("Token refresh failed: Invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::InvalidTokenType) => {
            warn!("Token refresh failed: Wrong token type");
            ApiResponse::bad_request(
                "INVALID_TOKEN_TYPE",
                "Invalid token type. Please use a refresh token.",
            )
        }

        Err(e @ RefreshTokenError::TokenNotYetValid) => {
            ApiResponse::bad_request("TOKEN_NOT_YET_VALID", &e.to_string())
        }

        Err(ref e) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}
