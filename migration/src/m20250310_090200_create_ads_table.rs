use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ads::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ads::Description).text().not_null())
                    .col(ColumnDef::new(Ads::Location).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Ads::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Ads::MinSalary).integer().not_null())
                    .col(ColumnDef::new(Ads::MaxSalary).integer().not_null())
                    .col(ColumnDef::new(Ads::InfoId).uuid().not_null())
                    .col(
                        ColumnDef::new(Ads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Ads live and die with the Info record they belong to
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ads_info_id")
                            .from(Ads::Table, Ads::InfoId)
                            .to(Info::Table, Info::Id)
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
                ALTER TABLE ads
                ADD CONSTRAINT chk_ads_status
                CHECK (status IN ('active', 'hidden', 'private', 'matched', 'archived'));

                ALTER TABLE ads
                ADD CONSTRAINT chk_ads_salary_range
                CHECK (min_salary <= max_salary);
                "#,
            )
            .await?;

        // info.main_ad -> ads.id, cleared when the ad goes away
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_info_main_ad")
                    .from(Info::Table, Info::MainAd)
                    .to(Ads::Table, Ads::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Listing and counting ads per info record
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_ads_info_id_created_at
                ON ads (info_id, created_at ASC);

                CREATE INDEX idx_ads_info_id_active
                ON ads (info_id)
                WHERE status = 'active';
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_info_main_ad")
                    .table(Info::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_ads_info_id_created_at;
                DROP INDEX IF EXISTS idx_ads_info_id_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ads {
    Table,
    Id,
    Description,
    Location,
    Status,
    MinSalary,
    MaxSalary,
    InfoId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Info {
    Table,
    Id,
    MainAd,
}
