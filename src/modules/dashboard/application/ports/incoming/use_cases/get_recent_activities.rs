use async_trait::async_trait;

use crate::modules::dashboard::application::domain::activity::Activity;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecentActivitiesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetRecentActivitiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Activity>, GetRecentActivitiesError>;
}
