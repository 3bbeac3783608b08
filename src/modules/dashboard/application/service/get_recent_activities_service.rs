use async_trait::async_trait;

use crate::modules::dashboard::application::domain::activity::{
    build_activities, Activity, RECENT_PER_SOURCE,
};
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    GetRecentActivitiesError, GetRecentActivitiesUseCase,
};
use crate::modules::dashboard::application::ports::outgoing::DashboardQuery;

pub struct GetRecentActivitiesService<Q>
where
    Q: DashboardQuery,
{
    query: Q,
}

impl<Q> GetRecentActivitiesService<Q>
where
    Q: DashboardQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRecentActivitiesUseCase for GetRecentActivitiesService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Activity>, GetRecentActivitiesError> {
        let (inquiries, properties) = tokio::try_join!(
            self.query.recent_inquiries(RECENT_PER_SOURCE),
            self.query.recent_properties(RECENT_PER_SOURCE),
        )
        .map_err(|e| GetRecentActivitiesError::QueryFailed(e.to_string()))?;

        Ok(build_activities(inquiries, properties))
    }
}
