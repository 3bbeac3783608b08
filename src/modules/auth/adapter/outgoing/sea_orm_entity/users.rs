use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum DbUserRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "REALTOR")]
    Realtor,
    #[sea_orm(string_value = "USER")]
    User,
}

impl From<DbUserRole> for UserRole {
    fn from(role: DbUserRole) -> Self {
        match role {
            DbUserRole::Admin => UserRole::Admin,
            DbUserRole::Realtor => UserRole::Realtor,
            DbUserRole::User => UserRole::User,
        }
    }
}

impl From<UserRole> for DbUserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => DbUserRole::Admin,
            UserRole::Realtor => DbUserRole::Realtor,
            UserRole::User => DbUserRole::User,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: DbUserRole,
    pub email_verified_at: Option<DateTimeWithTimeZone>,
    pub verification_token_hash: Option<String>,
    pub reset_token_hash: Option<String>,
    pub reset_token_expires_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let sea_orm::ActiveValue::Set(email) = &self.email {
            self.email = sea_orm::ActiveValue::Set(email.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
