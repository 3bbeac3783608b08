use sea_orm::entity::prelude::*;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "inquiry_status")]
pub enum DbInquiryStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "CONTACTED")]
    Contacted,
    #[sea_orm(string_value = "VIEWING_SCHEDULED")]
    ViewingScheduled,
    #[sea_orm(string_value = "OFFER_MADE")]
    OfferMade,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
    #[sea_orm(string_value = "SPAM")]
    Spam,
}

impl From<DbInquiryStatus> for InquiryStatus {
    fn from(value: DbInquiryStatus) -> Self {
        match value {
            DbInquiryStatus::New => InquiryStatus::New,
            DbInquiryStatus::Contacted => InquiryStatus::Contacted,
            DbInquiryStatus::ViewingScheduled => InquiryStatus::ViewingScheduled,
            DbInquiryStatus::OfferMade => InquiryStatus::OfferMade,
            DbInquiryStatus::Closed => InquiryStatus::Closed,
            DbInquiryStatus::Spam => InquiryStatus::Spam,
        }
    }
}

impl From<InquiryStatus> for DbInquiryStatus {
    fn from(value: InquiryStatus) -> Self {
        match value {
            InquiryStatus::New => DbInquiryStatus::New,
            InquiryStatus::Contacted => DbInquiryStatus::Contacted,
            InquiryStatus::ViewingScheduled => DbInquiryStatus::ViewingScheduled,
            InquiryStatus::OfferMade => DbInquiryStatus::OfferMade,
            InquiryStatus::Closed => DbInquiryStatus::Closed,
            InquiryStatus::Spam => DbInquiryStatus::Spam,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: DbInquiryStatus,
    pub property_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::property::adapter::outgoing::sea_orm_entity::properties::Entity",
        from = "Column::PropertyId",
        to = "crate::modules::property::adapter::outgoing::sea_orm_entity::properties::Column::Id",
        on_delete = "Cascade"
    )]
    Property,
}

impl Related<crate::modules::property::adapter::outgoing::sea_orm_entity::properties::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
