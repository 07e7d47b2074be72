use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::application::domain::entities::UserId;
use crate::modules::company::application::domain::entities::{Company, CompanyPatch};
use crate::modules::profile::application::domain::entities::PageRequest;
use crate::shared::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompanyRepositoryError {
    #[error("Company not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<CompanyRepositoryError> for ServiceError {
    fn from(err: CompanyRepositoryError) -> Self {
        match err {
            CompanyRepositoryError::NotFound => ServiceError::NotFound(err.to_string()),
            CompanyRepositoryError::DatabaseError(msg) => ServiceError::Repository(msg),
        }
    }
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Companies whose owner is verified, ordered by name.
    async fn list_verified(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<Vec<Company>, CompanyRepositoryError>;

    async fn find_by_id(&self, company_id: Uuid) -> Result<Option<Company>, CompanyRepositoryError>;

    async fn find_by_owner(&self, owner: UserId) -> Result<Option<Company>, CompanyRepositoryError>;

    async fn update(
        &self,
        company_id: Uuid,
        patch: CompanyPatch,
    ) -> Result<Company, CompanyRepositoryError>;

    /// Deletes the company, its Info and the Info's ads atomically.
    async fn delete_with_info(
        &self,
        company_id: Uuid,
        info_id: Option<Uuid>,
    ) -> Result<(), CompanyRepositoryError>;
}
