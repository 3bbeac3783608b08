use async_trait::async_trait;
use chrono::Utc;

use crate::modules::inquiry::application::domain::analytics::{
    build_analytics, trend_window_start, InquiryAnalytics, TOP_PROPERTY_LIMIT,
};
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    GetInquiryAnalyticsError, GetInquiryAnalyticsUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::InquiryQuery;

pub struct GetInquiryAnalyticsService<Q>
where
    Q: InquiryQuery,
{
    query: Q,
    avg_response_time_hours: f64,
}

impl<Q> GetInquiryAnalyticsService<Q>
where
    Q: InquiryQuery,
{
    pub fn new(query: Q, avg_response_time_hours: f64) -> Self {
        Self {
            query,
            avg_response_time_hours,
        }
    }
}

#[async_trait]
impl<Q> GetInquiryAnalyticsUseCase for GetInquiryAnalyticsService<Q>
where
    Q: InquiryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<InquiryAnalytics, GetInquiryAnalyticsError> {
        let now = Utc::now();

        let snapshot = self
            .query
            .analytics_snapshot(trend_window_start(now), TOP_PROPERTY_LIMIT)
            .await
            .map_err(|e| GetInquiryAnalyticsError::QueryFailed(e.to_string()))?;

        Ok(build_analytics(snapshot, now, self.avg_response_time_hours))
    }
}
