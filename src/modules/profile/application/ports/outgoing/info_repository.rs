use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    AdDeletion, AdSummary, Info, InfoFields, ProfileKind,
};
use crate::shared::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InfoRepositoryError {
    #[error("Info not found")]
    NotFound,

    /// The profile row to link was gone, or already had Info.
    #[error("Profile not available for linking")]
    ProfileUnavailable,

    #[error("Ad not found")]
    AdNotFound,

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<InfoRepositoryError> for ServiceError {
    fn from(err: InfoRepositoryError) -> Self {
        match err {
            InfoRepositoryError::NotFound => ServiceError::NotFound(err.to_string()),
            InfoRepositoryError::ProfileUnavailable => {
                ServiceError::BadRequest("Info already exists".to_string())
            }
            InfoRepositoryError::AdNotFound => ServiceError::NotFound(err.to_string()),
            InfoRepositoryError::InvalidRow(msg) | InfoRepositoryError::DatabaseError(msg) => {
                ServiceError::Repository(msg)
            }
        }
    }
}

#[async_trait]
pub trait InfoRepository: Send + Sync {
    async fn find_by_id(&self, info_id: Uuid) -> Result<Option<Info>, InfoRepositoryError>;

    /// Inserts the Info row and points the profile at it in one transaction.
    async fn create_for_profile(
        &self,
        kind: ProfileKind,
        profile_id: Uuid,
        fields: InfoFields,
    ) -> Result<Info, InfoRepositoryError>;

    /// Applies the supplied fields only.
    async fn update(&self, info_id: Uuid, fields: InfoFields) -> Result<Info, InfoRepositoryError>;

    async fn count_active_ads(&self, info_id: Uuid) -> Result<u64, InfoRepositoryError>;

    async fn count_matches(
        &self,
        kind: ProfileKind,
        profile_id: Uuid,
    ) -> Result<u64, InfoRepositoryError>;

    /// Ads under the Info, oldest first.
    async fn list_ads(&self, info_id: Uuid) -> Result<Vec<AdSummary>, InfoRepositoryError>;

    /// Returns `false` when no ad with that id lives under the Info.
    async fn set_main_ad(&self, info_id: Uuid, ad_id: Uuid) -> Result<bool, InfoRepositoryError>;

    /// Deletes the ad, clearing `main_ad` in the same transaction when it
    /// pointed at it.
    async fn delete_ad(&self, info_id: Uuid, ad_id: Uuid)
        -> Result<AdDeletion, InfoRepositoryError>;
}
