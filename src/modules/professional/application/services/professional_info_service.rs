use async_trait::async_trait;

use super::professional_of;
use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::modules::access::application::domain::policies::is_user_verified;
use crate::modules::professional::application::domain::entities::{
    ProfessionalInfoDisplay, ProfessionalPatch,
};
use crate::modules::professional::application::ports::incoming::use_cases::ProfessionalInfoUseCase;
use crate::modules::professional::application::ports::outgoing::ProfessionalRepository;
use crate::modules::profile::application::domain::entities::{non_blank, Info, InfoFields};
use crate::modules::profile::application::ports::outgoing::InfoRepository;
use crate::modules::profile::application::services::InfoLifecycle;
use crate::shared::api::StatusMessage;
use crate::shared::errors::ServiceError;

pub struct ProfessionalInfoService<R, I>
where
    R: ProfessionalRepository,
    I: InfoRepository,
{
    professional_repository: R,
    info_lifecycle: InfoLifecycle<I>,
}

impl<R, I> ProfessionalInfoService<R, I>
where
    R: ProfessionalRepository,
    I: InfoRepository,
{
    pub fn new(professional_repository: R, info_repository: I) -> Self {
        Self {
            professional_repository,
            info_lifecycle: InfoLifecycle::new(info_repository),
        }
    }
}

#[async_trait]
impl<R, I> ProfessionalInfoUseCase for ProfessionalInfoService<R, I>
where
    R: ProfessionalRepository + Send + Sync,
    I: InfoRepository + Send + Sync,
{
    async fn create_professional_info(
        &self,
        user: &User,
        summary: Option<String>,
        location: Option<String>,
    ) -> Result<Info, ServiceError> {
        is_user_verified(user, UserRole::Professional)?;
        let professional = professional_of(&self.professional_repository, user.id).await?;

        let fields = InfoFields {
            description: summary,
            location,
            picture: None,
        };

        self.info_lifecycle.create_info(&professional, fields).await
    }

    async fn edit_info(
        &self,
        user: &User,
        first_name: Option<String>,
        last_name: Option<String>,
        location: Option<String>,
    ) -> Result<StatusMessage, ServiceError> {
        is_user_verified(user, UserRole::Professional)?;
        let professional = professional_of(&self.professional_repository, user.id).await?;

        let patch = ProfessionalPatch {
            first_name,
            last_name,
            status: None,
        }
        .normalized();

        let professional = if patch.is_empty() {
            professional
        } else {
            self.professional_repository
                .update(professional.id, patch)
                .await?
        };

        if let Some(location) = non_blank(location) {
            let fields = InfoFields {
                location: Some(location),
                ..Default::default()
            };
            self.info_lifecycle.update_info(&professional, fields).await?;
        }

        tracing::info!("Update successful for professional {}", professional.id);
        Ok(StatusMessage::new("Update successful"))
    }

    async fn edit_professional_summary(
        &self,
        user: &User,
        summary: String,
    ) -> Result<StatusMessage, ServiceError> {
        is_user_verified(user, UserRole::Professional)?;
        let professional = professional_of(&self.professional_repository, user.id).await?;

        let fields = InfoFields {
            description: Some(summary),
            ..Default::default()
        };
        self.info_lifecycle.update_info(&professional, fields).await?;

        Ok(StatusMessage::new(
            "Your summary has been updated successfully",
        ))
    }

    async fn get_info(&self, user_id: UserId) -> Result<ProfessionalInfoDisplay, ServiceError> {
        let professional = professional_of(&self.professional_repository, user_id).await?;
        let (info, counts) = self
            .info_lifecycle
            .load_info_with_counts(&professional)
            .await?;

        Ok(ProfessionalInfoDisplay::new(professional, info, counts))
    }
}
