mod get_dashboard_stats_service;
mod get_recent_activities_service;

pub use get_dashboard_stats_service::GetDashboardStatsService;
pub use get_recent_activities_service::GetRecentActivitiesService;
