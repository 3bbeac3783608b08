use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Lead pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    New,
    Contacted,
    ViewingScheduled,
    OfferMade,
    Closed,
    Spam,
}

impl InquiryStatus {
    /// Pipeline order, used wherever statuses are listed.
    pub const ALL: [InquiryStatus; 6] = [
        InquiryStatus::New,
        InquiryStatus::Contacted,
        InquiryStatus::ViewingScheduled,
        InquiryStatus::OfferMade,
        InquiryStatus::Closed,
        InquiryStatus::Spam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "NEW",
            InquiryStatus::Contacted => "CONTACTED",
            InquiryStatus::ViewingScheduled => "VIEWING_SCHEDULED",
            InquiryStatus::OfferMade => "OFFER_MADE",
            InquiryStatus::Closed => "CLOSED",
            InquiryStatus::Spam => "SPAM",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown inquiry status: {s}"))
    }
}
