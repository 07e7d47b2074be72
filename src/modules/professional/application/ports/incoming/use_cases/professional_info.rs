use async_trait::async_trait;

use crate::modules::access::application::domain::entities::{User, UserId};
use crate::modules::professional::application::domain::entities::ProfessionalInfoDisplay;
use crate::modules::profile::application::domain::entities::Info;
use crate::shared::api::StatusMessage;
use crate::shared::errors::ServiceError;

#[async_trait]
pub trait ProfessionalInfoUseCase: Send + Sync {
    async fn create_professional_info(
        &self,
        user: &User,
        summary: Option<String>,
        location: Option<String>,
    ) -> Result<Info, ServiceError>;

    /// Names go to the profile, location to its Info (created on demand).
    async fn edit_info(
        &self,
        user: &User,
        first_name: Option<String>,
        last_name: Option<String>,
        location: Option<String>,
    ) -> Result<StatusMessage, ServiceError>;

    async fn edit_professional_summary(
        &self,
        user: &User,
        summary: String,
    ) -> Result<StatusMessage, ServiceError>;

    async fn get_info(&self, user_id: UserId) -> Result<ProfessionalInfoDisplay, ServiceError>;
}
