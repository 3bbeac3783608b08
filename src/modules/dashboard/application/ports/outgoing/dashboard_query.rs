use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::dashboard::application::domain::activity::{RecentInquiry, RecentProperty};
use crate::modules::dashboard::application::domain::stats::DashboardCounts;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Totals, with "this month" meaning at or after `month_start`.
    async fn counts(&self, month_start: DateTime<Utc>)
        -> Result<DashboardCounts, DashboardQueryError>;

    /// Newest inquiries first.
    async fn recent_inquiries(&self, limit: u64)
        -> Result<Vec<RecentInquiry>, DashboardQueryError>;

    /// Most recently updated listings first.
    async fn recent_properties(
        &self,
        limit: u64,
    ) -> Result<Vec<RecentProperty>, DashboardQueryError>;
}
