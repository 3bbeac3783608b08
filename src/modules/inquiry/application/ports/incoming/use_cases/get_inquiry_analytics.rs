use async_trait::async_trait;

use crate::modules::inquiry::application::domain::analytics::InquiryAnalytics;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetInquiryAnalyticsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetInquiryAnalyticsUseCase: Send + Sync {
    async fn execute(&self) -> Result<InquiryAnalytics, GetInquiryAnalyticsError>;
}
