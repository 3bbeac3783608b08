use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::inquiry_response::InquiryDetailResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::incoming::use_cases::UpdateInquiryStatusError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateInquiryRequest {
    /// Omit to leave the inquiry unchanged.
    #[schema(example = "CONTACTED")]
    pub status: Option<String>,
}

/// Move an inquiry through the pipeline (admin only)
#[utoipa::path(
    put,
    path = "/api/inquiries/{id}",
    tag = "inquiries",
    params(("id" = Uuid, Path, description = "Inquiry id")),
    request_body = UpdateInquiryRequest,
    responses(
        (status = 200, description = "Inquiry after the update", body = inline(SuccessResponse<InquiryDetailResponse>)),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/inquiries/{id}")]
pub async fn update_inquiry_handler(
    user: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateInquiryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let inquiry_id = path.into_inner();

    // An empty status counts as absent.
    let status = match non_blank(req.into_inner().status).as_deref() {
        None => None,
        Some(raw) => match raw.parse::<InquiryStatus>() {
            Ok(status) => Some(status),
            Err(_) => return ApiResponse::bad_request("INVALID_STATUS", "Invalid status"),
        },
    };

    match data.inquiry.update_status.execute(inquiry_id, status).await {
        Ok(view) => ApiResponse::success(InquiryDetailResponse::from(view)),
        Err(UpdateInquiryStatusError::NotFound) => {
            ApiResponse::not_found("INQUIRY_NOT_FOUND", "Inquiry not found")
        }
        Err(UpdateInquiryStatusError::RepositoryError(msg)) => {
            error!(%inquiry_id, user_id = %user.user_id(), "Failed to update inquiry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::inquiry::application::ports::incoming::use_cases::UpdateInquiryStatusUseCase;
    use crate::modules::inquiry::application::ports::outgoing::InquiryView;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::inquiry_view;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockUpdate;

    #[async_trait]
    impl UpdateInquiryStatusUseCase for MockUpdate {
        async fn execute(
            &self,
            inquiry_id: Uuid,
            status: Option<InquiryStatus>,
        ) -> Result<InquiryView, UpdateInquiryStatusError> {
            if inquiry_id.is_nil() {
                return Err(UpdateInquiryStatusError::NotFound);
            }
            Ok(inquiry_view(inquiry_id, status.unwrap_or(InquiryStatus::New)))
        }
    }

    async fn put(inquiry_id: Uuid, payload: serde_json::Value) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_update_inquiry_status(MockUpdate)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .app_data(web::Data::new(test_token_provider()))
                .service(update_inquiry_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/inquiries/{inquiry_id}"))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), UserRole::Admin)))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_update_status() {
        let (status, body) = put(Uuid::new_v4(), json!({ "status": "OFFER_MADE" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], "OFFER_MADE");
    }

    #[actix_web::test]
    async fn test_absent_status_is_accepted() {
        let (status, body) = put(Uuid::new_v4(), json!({})).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], "NEW");
    }

    #[actix_web::test]
    async fn test_empty_status_leaves_inquiry_unchanged() {
        for blank in ["", "   "] {
            let (status, body) = put(Uuid::new_v4(), json!({ "status": blank })).await;

            assert_eq!(status, 200);
            assert_eq!(body["data"]["status"], "NEW");
        }
    }

    #[actix_web::test]
    async fn test_unknown_status() {
        let (status, body) = put(Uuid::new_v4(), json!({ "status": "ARCHIVED" })).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_STATUS");
    }

    #[actix_web::test]
    async fn test_missing_inquiry() {
        let (status, body) = put(Uuid::nil(), json!({ "status": "CLOSED" })).await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "INQUIRY_NOT_FOUND");
    }
}
