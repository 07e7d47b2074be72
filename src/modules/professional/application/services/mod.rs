mod professional_info_service;
mod professional_profile_service;
mod resume_service;

pub use professional_info_service::ProfessionalInfoService;
pub use professional_profile_service::ProfessionalProfileService;
pub use resume_service::ResumeService;

use crate::modules::access::application::domain::entities::UserId;
use crate::modules::professional::application::domain::entities::Professional;
use crate::modules::professional::application::ports::outgoing::ProfessionalRepository;
use crate::modules::profile::application::domain::entities::ProfileKind;
use crate::shared::errors::ServiceError;

pub(crate) async fn professional_of<R>(
    repository: &R,
    owner: UserId,
) -> Result<Professional, ServiceError>
where
    R: ProfessionalRepository,
{
    repository
        .find_by_owner(owner)
        .await?
        .ok_or_else(|| ServiceError::NotFound(ProfileKind::Professional.not_logged_in()))
}
