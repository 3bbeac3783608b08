use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessage, SendContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every field defaults to empty so a missing one is reported as a validation error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    #[schema(example = "Jane")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Buyer")]
    pub last_name: String,
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    #[schema(example = "Viewing request")]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: String,
}

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message sent", body = inline(SuccessResponse<ContactResponse>)),
        (status = 400, description = "Missing field or invalid email", body = ErrorResponse),
        (status = 500, description = "Emails could not be sent", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn send_contact_message_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let message = ContactMessage {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
        subject: req.subject,
        message: req.message,
    };

    match data.contact.execute(message).await {
        Ok(()) => ApiResponse::success(ContactResponse {
            message: "Message sent successfully".to_string(),
        }),
        Err(SendContactMessageError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(SendContactMessageError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        Err(SendContactMessageError::EmailSendFailed(e)) => {
            error!("Failed sending contact emails: {}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_SEND_FAILED",
                "Failed to send emails. Please try again later.",
            )
        }
    }
}
