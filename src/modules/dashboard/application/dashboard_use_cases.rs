use std::sync::Arc;

use crate::modules::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsUseCase, GetRecentActivitiesUseCase,
};

#[derive(Clone)]
pub struct DashboardUseCases {
    pub stats: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
    pub activities: Arc<dyn GetRecentActivitiesUseCase + Send + Sync>,
}
