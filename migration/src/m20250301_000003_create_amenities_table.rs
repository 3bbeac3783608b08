use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::OnConflict;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Reference catalogue shipped with a fresh database.
const SEED_AMENITIES: &[(&str, &str)] = &[
    ("Air Conditioning", "Interior"),
    ("Heating", "Interior"),
    ("Balcony", "Interior"),
    ("Built-in Wardrobes", "Interior"),
    ("Modern Kitchen", "Interior"),
    ("Dishwasher", "Interior"),
    ("Washing Machine", "Interior"),
    ("Furnished", "Interior"),
    ("Study Room", "Interior"),
    ("Walk-in Closet", "Interior"),
    ("Garden", "Exterior"),
    ("Parking", "Exterior"),
    ("Swimming Pool", "Exterior"),
    ("Gym", "Exterior"),
    ("Security System", "Exterior"),
    ("CCTV", "Exterior"),
    ("Elevator", "Exterior"),
    ("Backup Power", "Exterior"),
    ("Mosque Nearby", "Community"),
    ("School Nearby", "Community"),
    ("Hospital Nearby", "Community"),
    ("Shopping Mall", "Community"),
    ("Public Transport", "Community"),
    ("Playground", "Community"),
    ("Community Center", "Community"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Amenities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Amenities::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Amenities::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Amenities::Category).string_len(50).not_null())
                    .col(ColumnDef::new(Amenities::Icon).string_len(50))
                    .col(
                        ColumnDef::new(Amenities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_amenities_category_name")
                    .table(Amenities::Table)
                    .col(Amenities::Category)
                    .col(Amenities::Name)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // property_amenities (join table)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PropertyAmenities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PropertyAmenities::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PropertyAmenities::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(PropertyAmenities::AmenityId).uuid().not_null())
                    .col(
                        ColumnDef::new(PropertyAmenities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_amenities_property_id")
                            .from(PropertyAmenities::Table, PropertyAmenities::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_amenities_amenity_id")
                            .from(PropertyAmenities::Table, PropertyAmenities::AmenityId)
                            .to(Amenities::Table, Amenities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_property_amenities_property_amenity")
                    .table(PropertyAmenities::Table)
                    .col(PropertyAmenities::PropertyId)
                    .col(PropertyAmenities::AmenityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_amenities_amenity_id")
                    .table(PropertyAmenities::Table)
                    .col(PropertyAmenities::AmenityId)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Seed catalogue
        // =====================================================
        let mut insert = Query::insert()
            .into_table(Amenities::Table)
            .columns([Amenities::Name, Amenities::Category])
            .on_conflict(OnConflict::column(Amenities::Name).do_nothing().to_owned())
            .to_owned();

        for (name, category) in SEED_AMENITIES {
            insert.values_panic([(*name).into(), (*category).into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyAmenities::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Amenities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Amenities {
    Table,
    Id,
    Name,
    Category,
    Icon,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PropertyAmenities {
    Table,
    Id,
    PropertyId,
    AmenityId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}
