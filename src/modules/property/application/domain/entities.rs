use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Sale,
    Rent,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Sale => "SALE",
            PropertyType::Rent => "RENT",
            PropertyType::Land => "LAND",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SALE" => Ok(PropertyType::Sale),
            "RENT" => Ok(PropertyType::Rent),
            "LAND" => Ok(PropertyType::Land),
            other => Err(format!("Unknown property type: {other}")),
        }
    }
}

/// Listing lifecycle. `Sold` and `Rented` count towards revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Active,
    Pending,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "ACTIVE",
            PropertyStatus::Pending => "PENDING",
            PropertyStatus::Sold => "SOLD",
            PropertyStatus::Rented => "RENTED",
        }
    }

    pub fn is_closed_deal(&self) -> bool {
        matches!(self, PropertyStatus::Sold | PropertyStatus::Rented)
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(PropertyStatus::Active),
            "PENDING" => Ok(PropertyStatus::Pending),
            "SOLD" => Ok(PropertyStatus::Sold),
            "RENTED" => Ok(PropertyStatus::Rented),
            other => Err(format!("Unknown property status: {other}")),
        }
    }
}

pub const DEFAULT_COUNTRY: &str = "USA";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parsing_is_exact() {
        assert_eq!("RENT".parse::<PropertyType>(), Ok(PropertyType::Rent));
        assert!("rent".parse::<PropertyType>().is_err());
        assert!("CONDO".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_status_serde_uses_screaming_case() {
        let json = serde_json::to_string(&PropertyStatus::Rented).unwrap();
        assert_eq!(json, "\"RENTED\"");

        let parsed: PropertyStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(parsed, PropertyStatus::Pending);
    }

    #[test]
    fn test_closed_deals() {
        assert!(PropertyStatus::Sold.is_closed_deal());
        assert!(PropertyStatus::Rented.is_closed_deal());
        assert!(!PropertyStatus::Active.is_closed_deal());
        assert!(!PropertyStatus::Pending.is_closed_deal());
    }
}
