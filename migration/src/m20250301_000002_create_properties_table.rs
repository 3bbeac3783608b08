use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TYPE property_type AS ENUM ('SALE', 'RENT', 'LAND');
                CREATE TYPE property_status AS ENUM ('ACTIVE', 'PENDING', 'SOLD', 'RENTED');
                "#,
            )
            .await?;

        // =====================================================
        // properties
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Properties::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Properties::Description).text().not_null())
                    .col(
                        ColumnDef::new(Properties::Price)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::Type)
                            .custom(Alias::new("property_type"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::Status)
                            .custom(Alias::new("property_status"))
                            .not_null()
                            .default(Expr::cust("'ACTIVE'::property_status")),
                    )
                    .col(ColumnDef::new(Properties::Bedrooms).integer())
                    .col(ColumnDef::new(Properties::Bathrooms).integer())
                    .col(ColumnDef::new(Properties::Area).decimal_len(12, 2))
                    .col(ColumnDef::new(Properties::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Properties::City).string_len(120).not_null())
                    .col(ColumnDef::new(Properties::State).string_len(120).not_null())
                    .col(ColumnDef::new(Properties::ZipCode).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Properties::Country)
                            .string_len(120)
                            .not_null()
                            .default("USA"),
                    )
                    .col(ColumnDef::new(Properties::Latitude).double())
                    .col(ColumnDef::new(Properties::Longitude).double())
                    .col(
                        ColumnDef::new(Properties::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Properties::OwnerId).uuid())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_owner_id")
                            .from(Properties::Table, Properties::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing order is featured first, newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_properties_listing_order
                ON properties (featured DESC, created_at DESC);

                CREATE INDEX idx_properties_status ON properties (status);
                CREATE INDEX idx_properties_type ON properties (type);
                CREATE INDEX idx_properties_price ON properties (price);
                CREATE INDEX idx_properties_city_lower ON properties (LOWER(city));
                CREATE INDEX idx_properties_updated_at ON properties (updated_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_properties_updated_at
                BEFORE UPDATE ON properties
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        // =====================================================
        // property_images
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PropertyImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PropertyImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PropertyImages::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(PropertyImages::Url).text().not_null())
                    .col(ColumnDef::new(PropertyImages::Alt).string_len(255))
                    .col(
                        ColumnDef::new(PropertyImages::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PropertyImages::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PropertyImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_images_property_id")
                            .from(PropertyImages::Table, PropertyImages::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_images_property_position")
                    .table(PropertyImages::Table)
                    .col(PropertyImages::PropertyId)
                    .col(PropertyImages::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyImages::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_properties_updated_at ON properties",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TYPE IF EXISTS property_status;
                DROP TYPE IF EXISTS property_type;
                "#,
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Title,
    Description,
    Price,
    Type,
    Status,
    Bedrooms,
    Bathrooms,
    Area,
    Address,
    City,
    State,
    ZipCode,
    Country,
    Latitude,
    Longitude,
    Featured,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PropertyImages {
    Table,
    Id,
    PropertyId,
    Url,
    Alt,
    IsPrimary,
    Position,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
