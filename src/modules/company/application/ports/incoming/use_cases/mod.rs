mod company_info;
mod company_profile;
mod job_ads;

pub use company_info::CompanyInfoUseCase;
pub use company_profile::CompanyProfileUseCase;
pub use job_ads::JobAdUseCase;
