use async_trait::async_trait;
use chrono::Utc;

use crate::modules::dashboard::application::domain::stats::{compute_stats, DashboardStats};
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase,
};
use crate::modules::dashboard::application::ports::outgoing::DashboardQuery;
use crate::shared::time::start_of_month;

pub struct GetDashboardStatsService<Q>
where
    Q: DashboardQuery,
{
    query: Q,
    avg_response_time_hours: f64,
}

impl<Q> GetDashboardStatsService<Q>
where
    Q: DashboardQuery,
{
    pub fn new(query: Q, avg_response_time_hours: f64) -> Self {
        Self {
            query,
            avg_response_time_hours,
        }
    }
}

#[async_trait]
impl<Q> GetDashboardStatsUseCase for GetDashboardStatsService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        let counts = self
            .query
            .counts(start_of_month(Utc::now()))
            .await
            .map_err(|e| GetDashboardStatsError::QueryFailed(e.to_string()))?;

        Ok(compute_stats(counts, self.avg_response_time_hours))
    }
}
