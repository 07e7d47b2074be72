use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // main_ad gets its foreign key once the ads table exists
        manager
            .create_table(
                Table::create()
                    .table(Info::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Info::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Info::Description).text().null())
                    .col(ColumnDef::new(Info::Location).string_len(100).null())
                    .col(ColumnDef::new(Info::Picture).binary().null())
                    .col(ColumnDef::new(Info::MainAd).uuid().null())
                    .col(
                        ColumnDef::new(Info::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Info::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Info {
    Table,
    Id,
    Description,
    Location,
    Picture,
    MainAd,
    CreatedAt,
}
