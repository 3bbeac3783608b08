use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "premier-deals".to_string(),
        access_token_expiry: 1800,
        refresh_token_expiry: 604800,
    }
}

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// Registered with `web::Data::new(..)` so the auth extractors can find it.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

pub fn access_token(user_id: Uuid, role: UserRole) -> String {
    test_jwt_service()
        .generate_access_token(user_id, role, true)
        .expect("failed to sign test token")
}

/// Ready-made `Authorization` header value.
pub fn bearer(user_id: Uuid, role: UserRole) -> String {
    format!("Bearer {}", access_token(user_id, role))
}
