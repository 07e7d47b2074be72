use async_trait::async_trait;
use uuid::Uuid;

use super::company_of;
use crate::modules::access::application::domain::entities::UserId;
use crate::modules::access::application::domain::policies::{is_admin, is_owner};
use crate::modules::access::application::ports::outgoing::UserQuery;
use crate::modules::company::application::domain::entities::{Company, CompanyPatch};
use crate::modules::company::application::ports::incoming::use_cases::CompanyProfileUseCase;
use crate::modules::company::application::ports::outgoing::CompanyRepository;
use crate::modules::profile::application::domain::entities::{PageRequest, ProfileKind};
use crate::shared::errors::ServiceError;

pub struct CompanyProfileService<R, U>
where
    R: CompanyRepository,
    U: UserQuery,
{
    company_repository: R,
    user_query: U,
}

impl<R, U> CompanyProfileService<R, U>
where
    R: CompanyRepository,
    U: UserQuery,
{
    pub fn new(company_repository: R, user_query: U) -> Self {
        Self {
            company_repository,
            user_query,
        }
    }
}

#[async_trait]
impl<R, U> CompanyProfileUseCase for CompanyProfileService<R, U>
where
    R: CompanyRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn get_multi(
        &self,
        name: Option<String>,
        page: Option<u64>,
    ) -> Result<Vec<Company>, ServiceError> {
        let name = name.filter(|n| !n.trim().is_empty());

        Ok(self
            .company_repository
            .list_verified(name, PageRequest::new(page, None))
            .await?)
    }

    async fn get_by_id(&self, company_id: Uuid) -> Result<Option<Company>, ServiceError> {
        Ok(self.company_repository.find_by_id(company_id).await?)
    }

    async fn get_company(&self, user_id: UserId) -> Result<Company, ServiceError> {
        company_of(&self.company_repository, user_id).await
    }

    async fn update(&self, user_id: UserId, patch: CompanyPatch) -> Result<Company, ServiceError> {
        let company = company_of(&self.company_repository, user_id).await?;
        let patch = patch.normalized();

        if patch.is_empty() {
            return Ok(company);
        }

        let updated = self.company_repository.update(company.id, patch).await?;
        tracing::info!("Company {} updated by {}", updated.id, user_id);

        Ok(updated)
    }

    async fn delete_by_id(&self, company_id: Uuid, caller: UserId) -> Result<(), ServiceError> {
        let company = self
            .company_repository
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Company not found".to_string()))?;

        let allowed = is_owner(&company, caller)
            || self
                .user_query
                .find_by_id(caller)
                .await?
                .is_some_and(|user| is_admin(&user));

        if !allowed {
            tracing::warn!("User {} denied deletion of company {}", caller, company_id);
            return Err(ServiceError::Forbidden(
                ProfileKind::Company.deletion_restricted(),
            ));
        }

        self.company_repository
            .delete_with_info(company.id, company.info_id)
            .await?;

        tracing::info!("Company {} deleted by {}", company_id, caller);
        Ok(())
    }
}
