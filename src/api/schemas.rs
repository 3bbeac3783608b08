use serde::Serialize;
use utoipa::ToSchema;

/// Documentation shape of `ApiResponse::success` / `ApiResponse::created`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Documentation shape of every error envelope.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable, upper snake case. Clients branch on this, not on `message`.
    #[schema(example = "PROPERTY_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Property not found")]
    pub message: String,
}
