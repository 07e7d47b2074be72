pub(crate) mod sea_orm_entity;
mod professional_repository_postgres;

pub use professional_repository_postgres::ProfessionalRepositoryPostgres;
