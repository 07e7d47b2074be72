use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::modules::access::adapter::outgoing::UserQueryPostgres;
use crate::modules::company::adapter::outgoing::CompanyRepositoryPostgres;
use crate::modules::company::application::company_use_cases::CompanyUseCases;
use crate::modules::company::application::services::{
    CompanyInfoService, CompanyProfileService, JobAdService,
};
use crate::modules::professional::adapter::outgoing::ProfessionalRepositoryPostgres;
use crate::modules::professional::application::professional_use_cases::ProfessionalUseCases;
use crate::modules::professional::application::services::{
    ProfessionalInfoService, ProfessionalProfileService, ResumeService,
};
use crate::modules::profile::adapter::outgoing::InfoRepositoryPostgres;

#[derive(Clone)]
pub struct AppState {
    pub company: CompanyUseCases,
    pub professional: ProfessionalUseCases,
}

impl AppState {
    /// Wires every use case against the Postgres adapters sharing `db`.
    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        let user_query = UserQueryPostgres::new(Arc::clone(&db));
        let info_repo = InfoRepositoryPostgres::new(Arc::clone(&db));
        let company_repo = CompanyRepositoryPostgres::new(Arc::clone(&db));
        let professional_repo = ProfessionalRepositoryPostgres::new(Arc::clone(&db));

        let company = CompanyUseCases {
            profile: Arc::new(CompanyProfileService::new(
                company_repo.clone(),
                user_query.clone(),
            )),
            info: Arc::new(CompanyInfoService::new(
                company_repo.clone(),
                info_repo.clone(),
            )),
            job_ads: Arc::new(JobAdService::new(company_repo, info_repo.clone())),
        };

        let professional = ProfessionalUseCases {
            profile: Arc::new(ProfessionalProfileService::new(
                professional_repo.clone(),
                user_query,
            )),
            info: Arc::new(ProfessionalInfoService::new(
                professional_repo.clone(),
                info_repo.clone(),
            )),
            resumes: Arc::new(ResumeService::new(professional_repo, info_repo)),
        };

        Self {
            company,
            professional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::company::adapter::outgoing::sea_orm_entity::companies;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    #[tokio::test]
    async fn wired_state_reaches_the_database() {
        let company_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![companies::Model {
                id: company_id,
                name: "Acme".to_string(),
                contacts: None,
                user_id: Uuid::new_v4(),
                info_id: None,
            }]])
            .into_connection();

        let state = AppState::from_connection(Arc::new(db));
        let company = state.company.profile.get_by_id(company_id).await.unwrap();

        assert_eq!(company.map(|c| c.name), Some("Acme".to_string()));
    }
}
