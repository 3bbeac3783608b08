use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[schema(example = "Jane Doe")]
    pub name: String,

    /// Email address, stored lower-cased
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password (6 to 128 characters)
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(
        example = "Account created successfully. Please check your email to verify your account."
    )]
    message: String,

    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "Jane Doe")]
    name: String,

    #[schema(example = "jane@example.com")]
    email: String,

    #[schema(example = "USER")]
    role: String,
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    match &err {
        CreateUserError::InvalidName(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_NAME", msg)
        }

        CreateUserError::InvalidEmail(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_EMAIL", msg)
        }

        CreateUserError::InvalidPassword(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_PASSWORD", msg)
        }

        CreateUserError::EmailAlreadyExists => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::conflict(
                "EMAIL_ALREADY_EXISTS",
                "An account with this email already exists",
            )
        }

        other => {
            error!(email = %req.email, error = %other, "Unhandled user creation error");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates a USER account and emails a verification link.
/// The account can sign in once the email is verified.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Account created successfully. Please check your email to verify your account.",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "name": "Jane Doe",
                        "email": "jane@example.com",
                        "role": "USER"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid name" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_NAME", "message": "Name cannot be empty" }
                }))),
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_EMAIL", "message": "Invalid email format" }
                }))),
                ("Invalid password" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_PASSWORD", "message": "Password must be at least 6 characters" }
                })))
            )
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "An account with this email already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(email = %req.email, "User registration attempt");

    let user_input = CreateUserInput {
        name: req.name.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.auth.register.register_user(user_input).await {
        Ok(user) => {
            info!(user_id = %user.user_id, email = %user.email, "User created successfully");

            ApiResponse::created(RegisterUserResponse {
                message: user.message,
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    name: user.name,
                    email: user.email,
                    role: user.role.to_string(),
                },
            })
        }

        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &req),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
    use crate::auth::application::ports::outgoing::UserRepositoryError;
    use crate::auth::application::use_cases::create_user::{CreateUserOutput, ICreateUserUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubUserEmailNotifier;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockCreateUser {
        error: Option<CreateUserError>,
    }

    #[async_trait]
    impl ICreateUserUseCase for MockCreateUser {
        async fn execute(
            &self,
            input: CreateUserInput,
        ) -> Result<CreateUserOutput, CreateUserError> {
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(CreateUserOutput {
                    user_id: Uuid::new_v4(),
                    name: input.name,
                    email: input.email.to_lowercase(),
                    role: UserRole::User,
                    verification_token: "raw-token".to_string(),
                }),
            }
        }
    }

    async fn post_register(error: Option<CreateUserError>) -> (u16, serde_json::Value) {
        let orchestrator = Arc::new(UserRegistrationOrchestrator::new(
            Arc::new(MockCreateUser { error }),
            Arc::new(StubUserEmailNotifier),
        ));

        let app_state = TestAppStateBuilder::default()
            .with_register_user_orchestrator(orchestrator)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "name": "Jane Doe",
                "email": "Jane@Example.com",
                "password": "secret123"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_register_user_success() {
        let (status, body) = post_register(None).await;

        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["email"], "jane@example.com");
        assert_eq!(body["data"]["user"]["role"], "USER");
        assert!(body["data"]["message"]
            .as_str()
            .unwrap()
            .contains("verify your account"));
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_register_user_validation_errors() {
        let cases = [
            (CreateUserError::InvalidName("Name cannot be empty".into()), "INVALID_NAME"),
            (CreateUserError::InvalidEmail("Invalid email format".into()), "INVALID_EMAIL"),
            (
                CreateUserError::InvalidPassword("Password must be at least 6 characters".into()),
                "INVALID_PASSWORD",
            ),
        ];

        for (error, code) in cases {
            let (status, body) = post_register(Some(error)).await;
            assert_eq!(status, 400);
            assert_eq!(body["error"]["code"], code);
        }
    }

    #[actix_web::test]
    async fn test_register_user_duplicate_email() {
        let (status, body) = post_register(Some(CreateUserError::EmailAlreadyExists)).await;

        assert_eq!(status, 409);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_register_user_repository_error() {
        let (status, body) = post_register(Some(CreateUserError::RepositoryError(
            UserRepositoryError::DatabaseError("Connection failed".to_string()),
        )))
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
