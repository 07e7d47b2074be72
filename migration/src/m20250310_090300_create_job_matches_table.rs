use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobMatches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobMatches::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobMatches::AdId).uuid().not_null())
                    .col(ColumnDef::new(JobMatches::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(JobMatches::ProfessionalId).uuid().not_null())
                    .col(
                        ColumnDef::new(JobMatches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_matches_ad_id")
                            .from(JobMatches::Table, JobMatches::AdId)
                            .to(Ads::Table, Ads::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_matches_company_id")
                            .from(JobMatches::Table, JobMatches::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_matches_professional_id")
                            .from(JobMatches::Table, JobMatches::ProfessionalId)
                            .to(Professionals::Table, Professionals::Id)
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
                CREATE INDEX idx_job_matches_company_id
                ON job_matches (company_id);

                CREATE INDEX idx_job_matches_professional_id
                ON job_matches (professional_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobMatches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobMatches {
    Table,
    Id,
    AdId,
    CompanyId,
    ProfessionalId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Ads {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Professionals {
    Table,
    Id,
}
