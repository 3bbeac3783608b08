mod get_dashboard_stats;
mod get_recent_activities;

pub use get_dashboard_stats::{GetDashboardStatsError, GetDashboardStatsUseCase};
pub use get_recent_activities::{GetRecentActivitiesError, GetRecentActivitiesUseCase};
