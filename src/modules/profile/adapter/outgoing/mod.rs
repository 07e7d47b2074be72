pub(crate) mod sea_orm_entity;
mod info_repository_postgres;
mod search_pattern;

pub(crate) use info_repository_postgres::delete_info_cascade;
pub use info_repository_postgres::InfoRepositoryPostgres;
pub(crate) use search_pattern::contains_pattern;
