pub(crate) mod sea_orm_entity;
mod company_repository_postgres;

pub use company_repository_postgres::CompanyRepositoryPostgres;
