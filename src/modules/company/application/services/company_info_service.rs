use async_trait::async_trait;

use super::company_of;
use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::modules::access::application::domain::policies::is_user_verified;
use crate::modules::company::application::domain::entities::CompanyInfoDisplay;
use crate::modules::company::application::ports::incoming::use_cases::CompanyInfoUseCase;
use crate::modules::company::application::ports::outgoing::CompanyRepository;
use crate::modules::profile::application::domain::entities::{Info, InfoFields};
use crate::modules::profile::application::ports::outgoing::InfoRepository;
use crate::modules::profile::application::services::InfoLifecycle;
use crate::shared::errors::ServiceError;

pub struct CompanyInfoService<R, I>
where
    R: CompanyRepository,
    I: InfoRepository,
{
    company_repository: R,
    info_lifecycle: InfoLifecycle<I>,
}

impl<R, I> CompanyInfoService<R, I>
where
    R: CompanyRepository,
    I: InfoRepository,
{
    pub fn new(company_repository: R, info_repository: I) -> Self {
        Self {
            company_repository,
            info_lifecycle: InfoLifecycle::new(info_repository),
        }
    }
}

#[async_trait]
impl<R, I> CompanyInfoUseCase for CompanyInfoService<R, I>
where
    R: CompanyRepository + Send + Sync,
    I: InfoRepository + Send + Sync,
{
    async fn create_company_info(
        &self,
        user: &User,
        description: Option<String>,
        location: Option<String>,
    ) -> Result<Info, ServiceError> {
        is_user_verified(user, UserRole::Company)?;
        let company = company_of(&self.company_repository, user.id).await?;

        let fields = InfoFields {
            description,
            location,
            picture: None,
        };

        self.info_lifecycle.create_info(&company, fields).await
    }

    async fn edit_company_info(
        &self,
        user: &User,
        fields: InfoFields,
    ) -> Result<Info, ServiceError> {
        is_user_verified(user, UserRole::Company)?;
        let company = company_of(&self.company_repository, user.id).await?;

        self.info_lifecycle.update_info(&company, fields).await
    }

    async fn get_info(&self, user_id: UserId) -> Result<CompanyInfoDisplay, ServiceError> {
        let company = company_of(&self.company_repository, user_id).await?;
        let (info, counts) = self.info_lifecycle.load_info_with_counts(&company).await?;

        Ok(CompanyInfoDisplay::new(company, info, counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::domain::entities::AdStatus;
    use crate::tests::support::in_memory::InMemoryStore;

    fn service(store: &InMemoryStore) -> CompanyInfoService<InMemoryStore, InMemoryStore> {
        CompanyInfoService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn create_company_info_requires_description_or_location() {
        let store = InMemoryStore::default();
        let (user, _) = store.seed_company("Acme", true);

        let result = service(&store).create_company_info(&user, None, None).await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::BadRequest(
                "Fields should be valid: 'description' and 'location'!".to_string()
            )
        );
    }

    #[tokio::test]
    async fn create_company_info_links_info_to_company() {
        let store = InMemoryStore::default();
        let (user, company) = store.seed_company("Acme", true);

        let info = service(&store)
            .create_company_info(&user, Some("We build robots".to_string()), None)
            .await
            .unwrap();

        assert_eq!(store.company(company.id).unwrap().info_id, Some(info.id));
        assert_eq!(info.location, None);
    }

    #[tokio::test]
    async fn unverified_company_cannot_create_info() {
        let store = InMemoryStore::default();
        let (user, _) = store.seed_company("Acme", false);

        let result = service(&store)
            .create_company_info(&user, Some("We build robots".to_string()), None)
            .await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::Forbidden("Please verify your account".to_string())
        );
    }

    #[tokio::test]
    async fn edit_company_info_creates_info_lazily() {
        let store = InMemoryStore::default();
        let (user, company) = store.seed_company("Acme", true);

        let fields = InfoFields {
            location: Some("Plovdiv".to_string()),
            ..Default::default()
        };
        let info = service(&store).edit_company_info(&user, fields).await.unwrap();

        assert_eq!(store.company(company.id).unwrap().info_id, Some(info.id));
        assert_eq!(info.location.as_deref(), Some("Plovdiv"));
    }

    #[tokio::test]
    async fn get_info_without_info_is_not_found() {
        let store = InMemoryStore::default();
        let (user, _) = store.seed_company("Acme", true);

        let result = service(&store).get_info(user.id).await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::NotFound("Please edit your personal information.".to_string())
        );
    }

    #[tokio::test]
    async fn get_info_merges_company_info_and_counts() {
        let store = InMemoryStore::default();
        let (user, company) = store.seed_company("Acme", true);
        let company = store.attach_company_info(company, "We build robots", "Sofia");
        let info_id = company.info_id.unwrap();
        let ad = store.seed_ad(info_id, AdStatus::Active);
        store.seed_ad(info_id, AdStatus::Archived);
        let (_, professional) = store.seed_professional(UserRole::Professional, true);
        store.seed_match(ad, company.id, professional.id);

        let display = service(&store).get_info(user.id).await.unwrap();

        assert_eq!(display.name, "Acme");
        assert_eq!(display.description.as_deref(), Some("We build robots"));
        assert_eq!(display.location.as_deref(), Some("Sofia"));
        assert_eq!(display.active_job_ads, 1);
        assert_eq!(display.number_of_matches, 1);
    }
}
