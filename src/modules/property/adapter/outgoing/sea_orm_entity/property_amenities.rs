use sea_orm::entity::prelude::*;

use crate::modules::amenity::adapter::outgoing::sea_orm_entity::amenities;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "property_amenities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub property_id: Uuid,
    pub amenity_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::properties::Entity",
        from = "Column::PropertyId",
        to = "super::properties::Column::Id",
        on_delete = "Cascade"
    )]
    Property,
    #[sea_orm(
        belongs_to = "amenities::Entity",
        from = "Column::AmenityId",
        to = "amenities::Column::Id",
        on_delete = "Cascade"
    )]
    Amenity,
}

impl Related<super::properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<amenities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Amenity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
