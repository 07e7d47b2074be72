use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // companies
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Companies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Companies::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Companies::Contacts).string_len(255).null())
                    .col(
                        ColumnDef::new(Companies::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Companies::InfoId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_companies_user_id")
                            .from(Companies::Table, Companies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_companies_info_id")
                            .from(Companies::Table, Companies::InfoId)
                            .to(Info::Table, Info::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // professionals
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Professionals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professionals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professionals::FirstName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::LastName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Professionals::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professionals::InfoId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professionals_user_id")
                            .from(Professionals::Table, Professionals::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professionals_info_id")
                            .from(Professionals::Table, Professionals::InfoId)
                            .to(Info::Table, Info::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE professionals
                ADD CONSTRAINT chk_professionals_status
                CHECK (status IN ('active', 'busy'));
                "#,
            )
            .await?;

        // Case-insensitive name search on the directory listings
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_companies_name_lower
                ON companies (lower(name));

                CREATE INDEX idx_professionals_names_lower
                ON professionals (lower(first_name), lower(last_name));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_companies_name_lower;
                DROP INDEX IF EXISTS idx_professionals_names_lower;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Professionals::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    Name,
    Contacts,
    UserId,
    InfoId,
}

#[derive(DeriveIden)]
enum Professionals {
    Table,
    Id,
    FirstName,
    LastName,
    Status,
    UserId,
    InfoId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Info {
    Table,
    Id,
}
