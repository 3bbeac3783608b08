use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

use super::entities::InquiryStatus;
use crate::shared::stats::percentage;
use crate::shared::time::{month_start, shift_month};

/// Months covered by the trend, current month included.
pub const TREND_MONTHS: u32 = 6;

/// Properties listed in `top_properties`.
pub const TOP_PROPERTY_LIMIT: u64 = 5;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopProperty {
    pub property_id: Uuid,
    pub title: String,
    pub inquiry_count: u64,
}

/// Raw aggregates read from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsSnapshot {
    pub status_counts: Vec<(InquiryStatus, u64)>,
    /// Per calendar month (UTC), from the start of the trend window.
    pub monthly_counts: Vec<MonthlyCount>,
    pub top_properties: Vec<TopProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusShare {
    pub status: InquiryStatus,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InquiryAnalytics {
    pub total_inquiries: u64,
    pub new_inquiries: u64,
    pub contacted_inquiries: u64,
    pub viewing_scheduled: u64,
    pub offer_made: u64,
    pub closed_inquiries: u64,
    pub spam_inquiries: u64,
    pub conversion_rate: f64,
    pub avg_response_time: f64,
    pub inquiries_this_month: u64,
    pub inquiries_last_month: u64,
    pub top_properties: Vec<TopProperty>,
    pub status_distribution: Vec<StatusShare>,
    pub monthly_trend: Vec<TrendPoint>,
}

/// First instant of the trend window relative to `now`.
pub fn trend_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = shift_month(now.year(), now.month(), -(TREND_MONTHS as i32 - 1));
    month_start(year, month)
}

pub fn build_analytics(
    snapshot: AnalyticsSnapshot,
    now: DateTime<Utc>,
    avg_response_time: f64,
) -> InquiryAnalytics {
    let count_of = |status: InquiryStatus| -> u64 {
        snapshot
            .status_counts
            .iter()
            .filter(|(s, _)| *s == status)
            .map(|(_, n)| n)
            .sum()
    };
    let total: u64 = snapshot.status_counts.iter().map(|(_, n)| n).sum();

    let in_month = |delta: i32| -> u64 {
        let (year, month) = shift_month(now.year(), now.month(), delta);
        snapshot
            .monthly_counts
            .iter()
            .filter(|m| m.year == year && m.month == month)
            .map(|m| m.count)
            .sum()
    };

    let status_distribution = InquiryStatus::ALL
        .into_iter()
        .map(|status| {
            let count = count_of(status);
            StatusShare {
                status,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    let monthly_trend = (0..TREND_MONTHS as i32)
        .rev()
        .map(|back| {
            let (_, month) = shift_month(now.year(), now.month(), -back);
            TrendPoint {
                month: MONTH_NAMES[(month - 1) as usize],
                count: in_month(-back),
            }
        })
        .collect();

    let closed = count_of(InquiryStatus::Closed);

    InquiryAnalytics {
        total_inquiries: total,
        new_inquiries: count_of(InquiryStatus::New),
        contacted_inquiries: count_of(InquiryStatus::Contacted),
        viewing_scheduled: count_of(InquiryStatus::ViewingScheduled),
        offer_made: count_of(InquiryStatus::OfferMade),
        closed_inquiries: closed,
        spam_inquiries: count_of(InquiryStatus::Spam),
        conversion_rate: percentage(closed, total),
        avg_response_time,
        inquiries_this_month: in_month(0),
        inquiries_last_month: in_month(-1),
        top_properties: snapshot.top_properties,
        status_distribution,
        monthly_trend,
    }
}
