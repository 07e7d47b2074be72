mod company_info_service;
mod company_profile_service;
mod job_ad_service;

pub use company_info_service::CompanyInfoService;
pub use company_profile_service::CompanyProfileService;
pub use job_ad_service::JobAdService;

use crate::modules::access::application::domain::entities::UserId;
use crate::modules::company::application::domain::entities::Company;
use crate::modules::company::application::ports::outgoing::CompanyRepository;
use crate::modules::profile::application::domain::entities::ProfileKind;
use crate::shared::errors::ServiceError;

/// Loads the company owned by `owner` or fails with the role's 404.
pub(crate) async fn company_of<R>(repository: &R, owner: UserId) -> Result<Company, ServiceError>
where
    R: CompanyRepository,
{
    repository
        .find_by_owner(owner)
        .await?
        .ok_or_else(|| ServiceError::NotFound(ProfileKind::Company.not_logged_in()))
}
