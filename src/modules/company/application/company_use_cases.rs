use std::sync::Arc;

use crate::modules::company::application::ports::incoming::use_cases::{
    CompanyInfoUseCase, CompanyProfileUseCase, JobAdUseCase,
};

#[derive(Clone)]
pub struct CompanyUseCases {
    pub profile: Arc<dyn CompanyProfileUseCase + Send + Sync>,
    pub info: Arc<dyn CompanyInfoUseCase + Send + Sync>,
    pub job_ads: Arc<dyn JobAdUseCase + Send + Sync>,
}
