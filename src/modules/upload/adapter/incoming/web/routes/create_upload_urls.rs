use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::modules::upload::application::ports::incoming::use_cases::{
    CreateUploadUrlsError, UploadFile, UploadSlot,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileRequest {
    #[schema(example = "living-room.jpg")]
    pub file_name: String,
    #[schema(example = "image/jpeg")]
    pub mime_type: String,
    #[schema(example = 1048576)]
    pub file_size_bytes: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUploadUrlsRequest {
    #[serde(default)]
    pub files: Vec<UploadFileRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadSlotResponse {
    pub upload_url: String,
    pub file_url: String,
}

impl From<UploadSlot> for UploadSlotResponse {
    fn from(slot: UploadSlot) -> Self {
        Self {
            upload_url: slot.upload_url,
            file_url: slot.file_url,
        }
    }
}

/// Request signed direct-upload URLs for property images
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body = CreateUploadUrlsRequest,
    responses(
        (status = 200, description = "One upload slot per file", body = inline(SuccessResponse<Vec<UploadSlotResponse>>)),
        (status = 400, description = "No files, or a file with a bad type or size", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 502, description = "Storage signing failed", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/upload")]
pub async fn create_upload_urls_handler(
    user: StaffUser,
    req: web::Json<CreateUploadUrlsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let files = req
        .into_inner()
        .files
        .into_iter()
        .map(|f| UploadFile {
            file_name: f.file_name,
            mime_type: f.mime_type,
            file_size_bytes: f.file_size_bytes,
        })
        .collect();

    match data.upload.execute(files).await {
        Ok(slots) => ApiResponse::success(
            slots
                .into_iter()
                .map(UploadSlotResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(CreateUploadUrlsError::NoFiles) => {
            ApiResponse::bad_request("NO_FILES", "No files uploaded")
        }
        Err(CreateUploadUrlsError::InvalidFile { file_name, reason }) => {
            warn!(user_id = %user.user_id(), file_name = %file_name, "Rejected upload: {}", reason);
            ApiResponse::bad_request(
                "INVALID_FILE",
                "Invalid file type or size. Only JPEG, PNG, WebP up to 10MB allowed.",
            )
        }
        Err(CreateUploadUrlsError::StorageError(e)) => {
            error!(user_id = %user.user_id(), "Storage error creating upload URLs: {}", e);
            ApiResponse::bad_gateway("STORAGE_ERROR", "Failed to generate upload URL")
        }
    }
}
