use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::dashboard::application::domain::activity::Activity;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityResponse {
    #[schema(example = "inquiry-3f2c8e9a-1b7d-4c55-9a0e-2d1f6b8c7e41")]
    pub id: String,
    /// `inquiry` or `property`
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub icon: String,
    pub color: String,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        let (icon, color) = activity.kind.presentation();
        Self {
            id: activity.id,
            kind: activity.kind.as_str().to_string(),
            title: activity.title,
            description: activity.description,
            timestamp: activity.timestamp,
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// Recent activity feed (admin only)
///
/// The newest inquiries and listing updates, merged, at most 10 entries.
#[utoipa::path(
    get,
    path = "/api/dashboard/activities",
    tag = "dashboard",
    responses(
        (status = 200, description = "Activity feed", body = inline(SuccessResponse<Vec<ActivityResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/dashboard/activities")]
pub async fn get_dashboard_activities_handler(
    _user: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.activities.execute().await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(ActivityResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Failed to load dashboard activities: {}", e);
            ApiResponse::internal_error()
        }
    }
}
