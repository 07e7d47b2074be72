pub(crate) mod sea_orm_entity;
mod user_query_postgres;

pub use user_query_postgres::UserQueryPostgres;
