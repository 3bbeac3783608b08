use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::verify_user_email::VerifyEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
pub struct VerifyEmailQuery {
    /// Token from the verification link
    pub token: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailResponse {
    #[schema(example = "Email verified successfully! You can now sign in to your account.")]
    message: String,

    #[schema(example = "jane@example.com")]
    email: String,
}

/// Verify an email address
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = "auth",
    params(VerifyEmailQuery),
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<VerifyEmailResponse>)),
        (
            status = 400,
            description = "Missing, unknown or expired token",
            body = ErrorResponse,
            examples(
                ("Invalid token" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_TOKEN", "message": "Invalid or expired verification token" }
                }))),
                ("Expired token" = (value = json!({
                    "success": false,
                    "error": { "code": "TOKEN_EXPIRED", "message": "Verification token has expired" }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/verify")]
pub async fn verify_user_email_handler(
    query: web::Query<VerifyEmailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = query.token.as_deref().unwrap_or_default();

    match data.auth.verify_email.execute(token).await {
        Ok(output) => {
            info!(user_id = %output.user_id, "Email verification succeeded");
            ApiResponse::success(VerifyEmailResponse {
                message: output.message,
                email: output.email,
            })
        }
        Err(VerifyEmailError::MissingToken) => {
            ApiResponse::bad_request("MISSING_TOKEN", "Verification token is required")
        }
        Err(e @ VerifyEmailError::InvalidToken) => {
            warn!("Email verification with unknown token");
            ApiResponse::bad_request("INVALID_TOKEN", &e.to_string())
        }
        Err(e @ VerifyEmailError::TokenExpired) => {
            ApiResponse::bad_request("TOKEN_EXPIRED", &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use crate::auth::application::use_cases::verify_user_email::{
        IVerifyUserEmailUseCase, VerifyEmailOutput, VERIFIED_MESSAGE,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockVerify(Result<(), VerifyEmailError>);

    #[async_trait]
    impl IVerifyUserEmailUseCase for MockVerify {
        async fn execute(&self, token: &str) -> Result<VerifyEmailOutput, VerifyEmailError> {
            if token.is_empty() {
                return Err(VerifyEmailError::MissingToken);
            }
            self.0.clone().map(|_| VerifyEmailOutput {
                user_id: Uuid::new_v4(),
                email: "jane@example.com".to_string(),
                message: VERIFIED_MESSAGE.to_string(),
            })
        }
    }

    async fn call(uri: &str, outcome: Result<(), VerifyEmailError>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_verify_user_email(MockVerify(outcome))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(verify_user_email_handler),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_verify_success() {
        let (status, body) = call("/api/auth/verify?token=abc", Ok(())).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["email"], "jane@example.com");
        assert_eq!(body["data"]["message"], VERIFIED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_verify_missing_token() {
        let (status, body) = call("/api/auth/verify", Ok(())).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "MISSING_TOKEN");
    }

    #[actix_web::test]
    async fn test_verify_invalid_and_expired() {
        let (status, body) =
            call("/api/auth/verify?token=x", Err(VerifyEmailError::InvalidToken)).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");

        let (status, body) =
            call("/api/auth/verify?token=x", Err(VerifyEmailError::TokenExpired)).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "TOKEN_EXPIRED");
    }

    #[actix_web::test]
    async fn test_verify_query_failure() {
        let (status, body) = call(
            "/api/auth/verify?token=x",
            Err(VerifyEmailError::QueryError(UserQueryError::DatabaseError(
                "down".into(),
            ))),
        )
        .await;
        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
