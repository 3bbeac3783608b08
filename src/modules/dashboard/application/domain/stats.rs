use rust_decimal::Decimal;

use crate::shared::stats::percentage;

/// View tracking does not exist; views are estimated per listing.
pub const ESTIMATED_VIEWS_PER_LISTING: u64 = 120;

/// Raw figures read from storage. "This month" starts on the 1st, 00:00 UTC.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardCounts {
    pub total_properties: u64,
    pub properties_this_month: u64,
    pub active_properties: u64,
    pub total_inquiries: u64,
    pub inquiries_this_month: u64,
    pub pending_inquiries: u64,
    /// Sum of prices over SOLD and RENTED listings.
    pub total_revenue: Decimal,
    /// Same, restricted to listings updated this month.
    pub revenue_this_month: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_properties: u64,
    pub total_inquiries: u64,
    pub total_views: u64,
    pub total_revenue: Decimal,
    pub properties_this_month: u64,
    pub inquiries_this_month: u64,
    pub views_this_month: u64,
    pub revenue_this_month: Decimal,
    pub active_properties: u64,
    pub pending_inquiries: u64,
    /// Inquiries per listing, in percent.
    pub conversion_rate: f64,
    pub avg_response_time: f64,
}

pub fn compute_stats(counts: DashboardCounts, avg_response_time: f64) -> DashboardStats {
    DashboardStats {
        total_properties: counts.total_properties,
        total_inquiries: counts.total_inquiries,
        total_views: counts.total_properties * ESTIMATED_VIEWS_PER_LISTING,
        total_revenue: counts.total_revenue,
        properties_this_month: counts.properties_this_month,
        inquiries_this_month: counts.inquiries_this_month,
        views_this_month: counts.properties_this_month * ESTIMATED_VIEWS_PER_LISTING,
        revenue_this_month: counts.revenue_this_month,
        active_properties: counts.active_properties,
        pending_inquiries: counts.pending_inquiries,
        conversion_rate: percentage(counts.total_inquiries, counts.total_properties),
        avg_response_time,
    }
}
