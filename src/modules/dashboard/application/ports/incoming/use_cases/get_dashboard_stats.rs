use async_trait::async_trait;

use crate::modules::dashboard::application::domain::stats::DashboardStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError>;
}
