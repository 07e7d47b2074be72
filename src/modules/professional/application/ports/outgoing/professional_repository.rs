use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::application::domain::entities::UserId;
use crate::modules::professional::application::domain::entities::{
    Professional, ProfessionalFilter, ProfessionalPatch,
};
use crate::modules::profile::application::domain::entities::PageRequest;
use crate::shared::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfessionalRepositoryError {
    #[error("Professional not found")]
    NotFound,

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ProfessionalRepositoryError> for ServiceError {
    fn from(err: ProfessionalRepositoryError) -> Self {
        match err {
            ProfessionalRepositoryError::NotFound => ServiceError::NotFound(err.to_string()),
            ProfessionalRepositoryError::InvalidRow(msg)
            | ProfessionalRepositoryError::DatabaseError(msg) => ServiceError::Repository(msg),
        }
    }
}

#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    /// Professionals whose owner is verified and who match every given filter.
    async fn list_approved(
        &self,
        filter: ProfessionalFilter,
        page: PageRequest,
    ) -> Result<Vec<Professional>, ProfessionalRepositoryError>;

    async fn find_by_id(
        &self,
        professional_id: Uuid,
    ) -> Result<Option<Professional>, ProfessionalRepositoryError>;

    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<Professional>, ProfessionalRepositoryError>;

    async fn update(
        &self,
        professional_id: Uuid,
        patch: ProfessionalPatch,
    ) -> Result<Professional, ProfessionalRepositoryError>;

    /// Deletes the professional together with its owning user account, its
    /// Info and the Info's ads, atomically.
    async fn delete_with_account(
        &self,
        professional: &Professional,
    ) -> Result<(), ProfessionalRepositoryError>;
}
