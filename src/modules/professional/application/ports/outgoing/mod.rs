pub mod professional_repository;
pub use professional_repository::{ProfessionalRepository, ProfessionalRepositoryError};
