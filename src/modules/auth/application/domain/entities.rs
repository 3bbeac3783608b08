use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account role. `Admin` and `Realtor` are staff and may manage listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Realtor,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Realtor => "REALTOR",
            UserRole::User => "USER",
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Realtor)
    }

    /// Staff accounts are provisioned by an operator and may sign in unverified.
    pub fn requires_verified_email(&self) -> bool {
        matches!(self, UserRole::User)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(UserRole::Admin),
            "REALTOR" => Ok(UserRole::Realtor),
            "USER" => Ok(UserRole::User),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_roles() {
        assert!(UserRole::Admin.is_staff());
        assert!(UserRole::Realtor.is_staff());
        assert!(!UserRole::User.is_staff());
    }

    #[test]
    fn test_only_plain_users_need_verified_email() {
        assert!(UserRole::User.requires_verified_email());
        assert!(!UserRole::Admin.requires_verified_email());
        assert!(!UserRole::Realtor.requires_verified_email());
    }

    #[test]
    fn test_role_round_trips_through_serde() {
        let json = serde_json::to_string(&UserRole::Realtor).unwrap();
        assert_eq!(json, "\"REALTOR\"");
        let back: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserRole::Realtor);
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert_eq!("ADMIN".parse::<UserRole>(), Ok(UserRole::Admin));
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_user_id_conversions() {
        let raw = Uuid::new_v4();
        let id = UserId::from(raw);
        assert_eq!(id.value(), raw);
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }
}
