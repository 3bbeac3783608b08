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
                CREATE TYPE inquiry_status AS ENUM (
                    'NEW', 'CONTACTED', 'VIEWING_SCHEDULED', 'OFFER_MADE', 'CLOSED', 'SPAM'
                );
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inquiries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Inquiries::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Inquiries::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Inquiries::Phone).string_len(50))
                    .col(ColumnDef::new(Inquiries::Message).text().not_null())
                    .col(
                        ColumnDef::new(Inquiries::Status)
                            .custom(Alias::new("inquiry_status"))
                            .not_null()
                            .default(Expr::cust("'NEW'::inquiry_status")),
                    )
                    .col(ColumnDef::new(Inquiries::PropertyId).uuid().not_null())
                    .col(
                        ColumnDef::new(Inquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Inquiries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiries_property_id")
                            .from(Inquiries::Table, Inquiries::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_inquiries_created_at ON inquiries (created_at DESC);
                CREATE INDEX idx_inquiries_status ON inquiries (status);
                CREATE INDEX idx_inquiries_property_id ON inquiries (property_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_inquiries_updated_at
                BEFORE UPDATE ON inquiries
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_inquiries_updated_at ON inquiries")
            .await?;

        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS inquiry_status")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
    Status,
    PropertyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}
