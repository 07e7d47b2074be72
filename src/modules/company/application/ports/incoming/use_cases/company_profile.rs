use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::application::domain::entities::UserId;
use crate::modules::company::application::domain::entities::{Company, CompanyPatch};
use crate::shared::errors::ServiceError;

#[async_trait]
pub trait CompanyProfileUseCase: Send + Sync {
    /// Directory of companies owned by verified users, ten per page.
    async fn get_multi(
        &self,
        name: Option<String>,
        page: Option<u64>,
    ) -> Result<Vec<Company>, ServiceError>;

    async fn get_by_id(&self, company_id: Uuid) -> Result<Option<Company>, ServiceError>;

    async fn get_company(&self, user_id: UserId) -> Result<Company, ServiceError>;

    async fn update(&self, user_id: UserId, patch: CompanyPatch) -> Result<Company, ServiceError>;

    async fn delete_by_id(&self, company_id: Uuid, caller: UserId) -> Result<(), ServiceError>;
}
