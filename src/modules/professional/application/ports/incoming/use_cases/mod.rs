mod professional_info;
mod professional_profile;
mod resumes;

pub use professional_info::ProfessionalInfoUseCase;
pub use professional_profile::ProfessionalProfileUseCase;
pub use resumes::ResumeUseCase;
