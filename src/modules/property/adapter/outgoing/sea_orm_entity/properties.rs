use sea_orm::entity::prelude::*;

use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "property_type")]
pub enum DbPropertyType {
    #[sea_orm(string_value = "SALE")]
    Sale,
    #[sea_orm(string_value = "RENT")]
    Rent,
    #[sea_orm(string_value = "LAND")]
    Land,
}

impl From<DbPropertyType> for PropertyType {
    fn from(value: DbPropertyType) -> Self {
        match value {
            DbPropertyType::Sale => PropertyType::Sale,
            DbPropertyType::Rent => PropertyType::Rent,
            DbPropertyType::Land => PropertyType::Land,
        }
    }
}

impl From<PropertyType> for DbPropertyType {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::Sale => DbPropertyType::Sale,
            PropertyType::Rent => DbPropertyType::Rent,
            PropertyType::Land => DbPropertyType::Land,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "property_status")]
pub enum DbPropertyStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "SOLD")]
    Sold,
    #[sea_orm(string_value = "RENTED")]
    Rented,
}

impl From<DbPropertyStatus> for PropertyStatus {
    fn from(value: DbPropertyStatus) -> Self {
        match value {
            DbPropertyStatus::Active => PropertyStatus::Active,
            DbPropertyStatus::Pending => PropertyStatus::Pending,
            DbPropertyStatus::Sold => PropertyStatus::Sold,
            DbPropertyStatus::Rented => PropertyStatus::Rented,
        }
    }
}

impl From<PropertyStatus> for DbPropertyStatus {
    fn from(value: PropertyStatus) -> Self {
        match value {
            PropertyStatus::Active => DbPropertyStatus::Active,
            PropertyStatus::Pending => DbPropertyStatus::Pending,
            PropertyStatus::Sold => DbPropertyStatus::Sold,
            PropertyStatus::Rented => DbPropertyStatus::Rented,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_name = "type")]
    pub property_type: DbPropertyType,
    pub status: DbPropertyStatus,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub area: Option<Decimal>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub longitude: Option<f64>,
    pub featured: bool,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::property_images::Entity")]
    Images,
    #[sea_orm(has_many = "super::property_amenities::Entity")]
    Amenities,
}

impl Related<super::property_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::property_amenities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Amenities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
