use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::amenity::application::ports::outgoing::AmenityView;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmenityResponse {
    pub id: Uuid,
    #[schema(example = "Swimming Pool")]
    pub name: String,
    #[schema(example = "Exterior")]
    pub category: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<AmenityView> for AmenityResponse {
    fn from(view: AmenityView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            category: view.category,
            icon: view.icon,
            created_at: view.created_at,
        }
    }
}
