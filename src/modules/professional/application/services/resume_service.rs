use async_trait::async_trait;
use uuid::Uuid;

use super::professional_of;
use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::modules::access::application::domain::policies::is_user_verified;
use crate::modules::professional::application::ports::incoming::use_cases::ResumeUseCase;
use crate::modules::professional::application::ports::outgoing::ProfessionalRepository;
use crate::modules::profile::application::domain::entities::{
    AdDeletion, AdSummary, ProfileKind,
};
use crate::modules::profile::application::ports::outgoing::InfoRepository;
use crate::modules::profile::application::services::AdCatalog;
use crate::shared::api::StatusMessage;
use crate::shared::errors::ServiceError;

pub struct ResumeService<R, I>
where
    R: ProfessionalRepository,
    I: InfoRepository,
{
    professional_repository: R,
    ad_catalog: AdCatalog<I>,
}

impl<R, I> ResumeService<R, I>
where
    R: ProfessionalRepository,
    I: InfoRepository,
{
    pub fn new(professional_repository: R, info_repository: I) -> Self {
        Self {
            professional_repository,
            ad_catalog: AdCatalog::new(info_repository),
        }
    }
}

#[async_trait]
impl<R, I> ResumeUseCase for ResumeService<R, I>
where
    R: ProfessionalRepository + Send + Sync,
    I: InfoRepository + Send + Sync,
{
    async fn get_resumes(&self, user_id: UserId) -> Result<Vec<AdSummary>, ServiceError> {
        let professional = professional_of(&self.professional_repository, user_id).await?;

        self.ad_catalog.list_ads(&professional).await
    }

    async fn setup_main_resume(
        &self,
        ad_id: Uuid,
        user: &User,
    ) -> Result<StatusMessage, ServiceError> {
        is_user_verified(user, UserRole::Professional)?;
        let professional = professional_of(&self.professional_repository, user.id).await?;

        let outcome = self.ad_catalog.setup_main_ad(&professional, ad_id).await?;

        Ok(StatusMessage::new(outcome.message(ProfileKind::Professional)))
    }

    async fn delete_resume_by_id(
        &self,
        user: &User,
        ad_id: Uuid,
    ) -> Result<AdDeletion, ServiceError> {
        is_user_verified(user, UserRole::Professional)?;
        let professional = professional_of(&self.professional_repository, user.id).await?;

        self.ad_catalog.delete_ad(&professional, ad_id).await
    }
}
