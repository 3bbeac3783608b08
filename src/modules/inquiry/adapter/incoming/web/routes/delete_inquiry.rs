use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::inquiry::application::ports::incoming::use_cases::DeleteInquiryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteInquiryResponse {
    #[schema(example = "Inquiry deleted successfully")]
    pub message: String,
}

/// Delete an inquiry (admin only)
#[utoipa::path(
    delete,
    path = "/api/inquiries/{id}",
    tag = "inquiries",
    params(("id" = Uuid, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry deleted", body = inline(SuccessResponse<DeleteInquiryResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/inquiries/{id}")]
pub async fn delete_inquiry_handler(
    user: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let inquiry_id = path.into_inner();

    match data.inquiry.delete.execute(inquiry_id).await {
        Ok(()) => ApiResponse::success(DeleteInquiryResponse {
            message: "Inquiry deleted successfully".to_string(),
        }),
        Err(DeleteInquiryError::NotFound) => {
            ApiResponse::not_found("INQUIRY_NOT_FOUND", "Inquiry not found")
        }
        Err(DeleteInquiryError::RepositoryError(msg)) => {
            error!(%inquiry_id, user_id = %user.user_id(), "Failed to delete inquiry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::inquiry::application::ports::incoming::use_cases::DeleteInquiryUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockDelete(Result<(), DeleteInquiryError>);

    #[async_trait]
    impl DeleteInquiryUseCase for MockDelete {
        async fn execute(&self, _inquiry_id: Uuid) -> Result<(), DeleteInquiryError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<(), DeleteInquiryError>) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_delete_inquiry(MockDelete(result))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_inquiry_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/inquiries/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), UserRole::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete() {
        let (status, body) = call(Ok(())).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["message"], "Inquiry deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_missing() {
        let (status, body) = call(Err(DeleteInquiryError::NotFound)).await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "INQUIRY_NOT_FOUND");
    }
}
