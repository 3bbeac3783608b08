use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::UserRole, ports::outgoing::token_provider::TokenProvider,
};
use crate::shared::api::ApiResponse;

/// Any caller holding a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
    pub is_verified: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn forbidden() -> ActixError {
    create_api_error(ApiResponse::forbidden(
        "FORBIDDEN",
        "You do not have permission to perform this action",
    ))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let jwt_service = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("Token provider is not registered as app data");
            create_api_error(ApiResponse::internal_error())
        })?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = jwt_service.verify_token(&token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != "access" {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        role: claims.role,
        is_verified: claims.is_verified,
    })
}

/// ADMIN or REALTOR.
#[derive(Debug, Clone)]
pub struct StaffUser(AuthenticatedUser);

impl StaffUser {
    pub fn into_inner(self) -> AuthenticatedUser {
        self.0
    }

    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }
}

impl FromRequest for StaffUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|user| {
            if user.role.is_staff() {
                Ok(StaffUser(user))
            } else {
                Err(forbidden())
            }
        }))
    }
}

#[derive(Debug, Clone)]
pub struct AdminUser(AuthenticatedUser);

impl AdminUser {
    pub fn into_inner(self) -> AuthenticatedUser {
        self.0
    }

    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|user| match user.role {
            UserRole::Admin => Ok(AdminUser(user)),
            _ => Err(forbidden()),
        }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
