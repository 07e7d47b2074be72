use std::sync::Arc;

use crate::modules::professional::application::ports::incoming::use_cases::{
    ProfessionalInfoUseCase, ProfessionalProfileUseCase, ResumeUseCase,
};

#[derive(Clone)]
pub struct ProfessionalUseCases {
    pub profile: Arc<dyn ProfessionalProfileUseCase + Send + Sync>,
    pub info: Arc<dyn ProfessionalInfoUseCase + Send + Sync>,
    pub resumes: Arc<dyn ResumeUseCase + Send + Sync>,
}
