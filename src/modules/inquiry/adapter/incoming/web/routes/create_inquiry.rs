use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::inquiry_response::InquiryResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::inquiry::application::ports::incoming::use_cases::CreateInquiryError;
use crate::modules::inquiry::application::ports::outgoing::NewInquiry;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    #[schema(example = "Jane Buyer")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: Uuid,
}

/// Submit an inquiry about a property
#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = "inquiries",
    request_body = CreateInquiryRequest,
    responses(
        (status = 201, description = "Inquiry recorded", body = inline(SuccessResponse<InquiryResponse>)),
        (status = 400, description = "Missing field or invalid email", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
    )
)]
#[post("/api/inquiries")]
pub async fn create_inquiry_handler(
    req: web::Json<CreateInquiryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let inquiry = NewInquiry {
        name: req.name,
        email: req.email,
        phone: req.phone,
        message: req.message,
        property_id: req.property_id,
    };

    match data.inquiry.create.execute(inquiry).await {
        Ok(view) => ApiResponse::created(InquiryResponse::from(view)),
        Err(CreateInquiryError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreateInquiryError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        Err(CreateInquiryError::PropertyNotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }
        Err(CreateInquiryError::RepositoryError(msg)) => {
            error!("Failed to create inquiry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::inquiry::application::domain::entities::InquiryStatus;
    use crate::modules::inquiry::application::ports::incoming::use_cases::CreateInquiryUseCase;
    use crate::modules::inquiry::application::ports::outgoing::InquiryView;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::inquiry_view;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockCreate;

    #[async_trait]
    impl CreateInquiryUseCase for MockCreate {
        async fn execute(&self, inquiry: NewInquiry) -> Result<InquiryView, CreateInquiryError> {
            if !inquiry.email.contains('@') {
                return Err(CreateInquiryError::InvalidEmail);
            }
            if inquiry.property_id.is_nil() {
                return Err(CreateInquiryError::PropertyNotFound);
            }
            let mut view = inquiry_view(Uuid::new_v4(), InquiryStatus::New);
            view.name = inquiry.name;
            view.property.id = inquiry.property_id;
            Ok(view)
        }
    }

    async fn post(payload: serde_json::Value) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_create_inquiry(MockCreate)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(create_inquiry_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/inquiries")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn body(property_id: Uuid) -> serde_json::Value {
        json!({
            "name": "Jane Buyer",
            "email": "jane@example.com",
            "message": "Is it still available?",
            "propertyId": property_id
        })
    }

    #[actix_web::test]
    async fn test_create_is_public() {
        let property_id = Uuid::new_v4();
        let (status, body) = post(body(property_id)).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["status"], "NEW");
        assert_eq!(body["data"]["propertyId"], property_id.to_string());
        assert_eq!(body["data"]["property"]["images"][0]["isPrimary"], true);
        assert!(body["data"]["property"].get("price").is_none());
    }

    #[actix_web::test]
    async fn test_invalid_email() {
        let mut payload = body(Uuid::new_v4());
        payload["email"] = json!("not-an-email");

        let (status, body) = post(payload).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn test_unknown_property() {
        let (status, body) = post(body(Uuid::nil())).await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "PROPERTY_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_missing_message() {
        let mut payload = body(Uuid::new_v4());
        payload.as_object_mut().unwrap().remove("message");

        let (status, body) = post(payload).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
