use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::application::domain::entities::{User, UserId};
use crate::modules::professional::application::domain::entities::{
    Professional, ProfessionalFilter, ProfessionalPatch, ProfessionalStatus,
};
use crate::shared::api::StatusMessage;
use crate::shared::errors::ServiceError;

#[async_trait]
pub trait ProfessionalProfileUseCase: Send + Sync {
    /// Defaults to the first page of ten.
    async fn get_all_approved_professionals(
        &self,
        filter: ProfessionalFilter,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<Professional>, ServiceError>;

    async fn get_by_id(&self, professional_id: Uuid)
        -> Result<Option<Professional>, ServiceError>;

    async fn get_professional(&self, user_id: UserId) -> Result<Professional, ServiceError>;

    async fn update(
        &self,
        user_id: UserId,
        patch: ProfessionalPatch,
    ) -> Result<Professional, ServiceError>;

    async fn change_status(
        &self,
        status: ProfessionalStatus,
        user: &User,
    ) -> Result<StatusMessage, ServiceError>;

    async fn delete_professional_by_id(
        &self,
        professional_id: Uuid,
        caller: UserId,
    ) -> Result<(), ServiceError>;
}
