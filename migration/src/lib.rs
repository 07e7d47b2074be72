pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_090000_create_info_table;
mod m20250310_090100_create_profiles_tables;
mod m20250310_090200_create_ads_table;
mod m20250310_090300_create_job_matches_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_090000_create_info_table::Migration),
            Box::new(m20250310_090100_create_profiles_tables::Migration),
            Box::new(m20250310_090200_create_ads_table::Migration),
            Box::new(m20250310_090300_create_job_matches_table::Migration),
        ]
    }
}
