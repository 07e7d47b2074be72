use async_trait::async_trait;
use uuid::Uuid;

use super::company_of;
use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::modules::access::application::domain::policies::is_user_verified;
use crate::modules::company::application::ports::incoming::use_cases::JobAdUseCase;
use crate::modules::company::application::ports::outgoing::CompanyRepository;
use crate::modules::profile::application::domain::entities::{
    AdDeletion, AdSummary, ProfileKind,
};
use crate::modules::profile::application::ports::outgoing::InfoRepository;
use crate::modules::profile::application::services::AdCatalog;
use crate::shared::api::StatusMessage;
use crate::shared::errors::ServiceError;

pub struct JobAdService<R, I>
where
    R: CompanyRepository,
    I: InfoRepository,
{
    company_repository: R,
    ad_catalog: AdCatalog<I>,
}

impl<R, I> JobAdService<R, I>
where
    R: CompanyRepository,
    I: InfoRepository,
{
    pub fn new(company_repository: R, info_repository: I) -> Self {
        Self {
            company_repository,
            ad_catalog: AdCatalog::new(info_repository),
        }
    }
}

#[async_trait]
impl<R, I> JobAdUseCase for JobAdService<R, I>
where
    R: CompanyRepository + Send + Sync,
    I: InfoRepository + Send + Sync,
{
    async fn get_job_ads(&self, user_id: UserId) -> Result<Vec<AdSummary>, ServiceError> {
        let company = company_of(&self.company_repository, user_id).await?;

        self.ad_catalog.list_ads(&company).await
    }

    async fn setup_main_job_ad(
        &self,
        ad_id: Uuid,
        user: &User,
    ) -> Result<StatusMessage, ServiceError> {
        is_user_verified(user, UserRole::Company)?;
        let company = company_of(&self.company_repository, user.id).await?;

        let outcome = self.ad_catalog.setup_main_ad(&company, ad_id).await?;

        Ok(StatusMessage::new(outcome.message(ProfileKind::Company)))
    }

    async fn delete_job_ad_by_id(
        &self,
        user: &User,
        ad_id: Uuid,
    ) -> Result<AdDeletion, ServiceError> {
        is_user_verified(user, UserRole::Company)?;
        let company = company_of(&self.company_repository, user.id).await?;

        self.ad_catalog.delete_ad(&company, ad_id).await
    }
}
