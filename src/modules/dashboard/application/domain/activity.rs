use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::property::application::domain::entities::PropertyStatus;

/// Entries taken from each source.
pub const RECENT_PER_SOURCE: u64 = 5;

/// Entries returned after merging.
pub const MAX_ACTIVITIES: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RecentInquiry {
    pub id: Uuid,
    pub name: String,
    /// `None` when the property is gone.
    pub property_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentProperty {
    pub id: Uuid,
    pub title: String,
    pub status: PropertyStatus,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Inquiry,
    Property,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Inquiry => "inquiry",
            ActivityKind::Property => "property",
        }
    }

    /// Icon name and colour used by the admin UI.
    pub fn presentation(&self) -> (&'static str, &'static str) {
        match self {
            ActivityKind::Inquiry => ("MessageSquare", "blue"),
            ActivityKind::Property => ("Home", "green"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Merges both feeds, newest first, capped at [`MAX_ACTIVITIES`].
pub fn build_activities(
    inquiries: Vec<RecentInquiry>,
    properties: Vec<RecentProperty>,
) -> Vec<Activity> {
    let inquiry_items = inquiries.into_iter().map(|i| Activity {
        id: format!("inquiry-{}", i.id),
        kind: ActivityKind::Inquiry,
        title: "New Inquiry".to_string(),
        description: format!(
            "{} inquired about {}",
            i.name,
            i.property_title.as_deref().unwrap_or("a property")
        ),
        timestamp: i.created_at,
    });

    let property_items = properties.into_iter().map(|p| Activity {
        id: format!("property-{}", p.id),
        kind: ActivityKind::Property,
        title: "Property Updated".to_string(),
        description: format!("{} status updated to {}", p.title, p.status),
        timestamp: p.updated_at,
    });

    let mut activities: Vec<Activity> = inquiry_items.chain(property_items).collect();
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities.truncate(MAX_ACTIVITIES);
    activities
}
