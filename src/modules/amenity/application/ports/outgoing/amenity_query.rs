use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct AmenityView {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AmenityQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenityQuery: Send + Sync {
    /// Ordered by category, then name. `category` is an exact match.
    async fn list(&self, category: Option<String>) -> Result<Vec<AmenityView>, AmenityQueryError>;

    async fn name_exists(&self, name: &str) -> Result<bool, AmenityQueryError>;
}
