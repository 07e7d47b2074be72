use async_trait::async_trait;
use uuid::Uuid;

use super::professional_of;
use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::modules::access::application::domain::policies::{
    is_admin, is_owner, is_user_verified,
};
use crate::modules::access::application::ports::outgoing::UserQuery;
use crate::modules::professional::application::domain::entities::{
    Professional, ProfessionalFilter, ProfessionalPatch, ProfessionalStatus,
};
use crate::modules::professional::application::ports::incoming::use_cases::ProfessionalProfileUseCase;
use crate::modules::professional::application::ports::outgoing::ProfessionalRepository;
use crate::modules::profile::application::domain::entities::{PageRequest, ProfileKind};
use crate::shared::api::StatusMessage;
use crate::shared::errors::ServiceError;

pub struct ProfessionalProfileService<R, U>
where
    R: ProfessionalRepository,
    U: UserQuery,
{
    professional_repository: R,
    user_query: U,
}

impl<R, U> ProfessionalProfileService<R, U>
where
    R: ProfessionalRepository,
    U: UserQuery,
{
    pub fn new(professional_repository: R, user_query: U) -> Self {
        Self {
            professional_repository,
            user_query,
        }
    }
}

#[async_trait]
impl<R, U> ProfessionalProfileUseCase for ProfessionalProfileService<R, U>
where
    R: ProfessionalRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn get_all_approved_professionals(
        &self,
        filter: ProfessionalFilter,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<Professional>, ServiceError> {
        Ok(self
            .professional_repository
            .list_approved(filter.normalized(), PageRequest::new(page, page_size))
            .await?)
    }

    async fn get_by_id(
        &self,
        professional_id: Uuid,
    ) -> Result<Option<Professional>, ServiceError> {
        Ok(self
            .professional_repository
            .find_by_id(professional_id)
            .await?)
    }

    async fn get_professional(&self, user_id: UserId) -> Result<Professional, ServiceError> {
        professional_of(&self.professional_repository, user_id).await
    }

    async fn update(
        &self,
        user_id: UserId,
        patch: ProfessionalPatch,
    ) -> Result<Professional, ServiceError> {
        let professional = professional_of(&self.professional_repository, user_id).await?;
        let patch = patch.normalized();

        if patch.is_empty() {
            return Ok(professional);
        }

        let updated = self
            .professional_repository
            .update(professional.id, patch)
            .await?;
        tracing::info!("Professional {} updated by {}", updated.id, user_id);

        Ok(updated)
    }

    async fn change_status(
        &self,
        status: ProfessionalStatus,
        user: &User,
    ) -> Result<StatusMessage, ServiceError> {
        is_user_verified(user, UserRole::Professional)?;
        let professional = professional_of(&self.professional_repository, user.id).await?;

        let patch = ProfessionalPatch {
            status: Some(status),
            ..Default::default()
        };
        self.professional_repository
            .update(professional.id, patch)
            .await?;

        tracing::info!("Professional {} is now {}", professional.id, status);
        Ok(StatusMessage::new("Status changed successfully!"))
    }

    async fn delete_professional_by_id(
        &self,
        professional_id: Uuid,
        caller: UserId,
    ) -> Result<(), ServiceError> {
        let professional = self
            .professional_repository
            .find_by_id(professional_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Professional not found".to_string()))?;

        let allowed = is_owner(&professional, caller)
            || self
                .user_query
                .find_by_id(caller)
                .await?
                .is_some_and(|user| is_admin(&user));

        if !allowed {
            tracing::warn!(
                "User {} denied deletion of professional {}",
                caller,
                professional_id
            );
            return Err(ServiceError::Forbidden(
                ProfileKind::Professional.deletion_restricted(),
            ));
        }

        self.professional_repository
            .delete_with_account(&professional)
            .await?;

        tracing::info!("Professional {} deleted by {}", professional_id, caller);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::domain::entities::AdStatus;
    use crate::tests::support::in_memory::InMemoryStore;

    fn service(
        store: &InMemoryStore,
    ) -> ProfessionalProfileService<InMemoryStore, InMemoryStore> {
        ProfessionalProfileService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn get_professional_without_profile_is_not_found() {
        let store = InMemoryStore::default();
        let user = store.seed_user(UserRole::Professional, true);

        let result = service(&store).get_professional(user.id).await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::NotFound("You are not logged as professional".to_string())
        );
    }

    #[tokio::test]
    async fn change_status_updates_verified_professional() {
        let store = InMemoryStore::default();
        let (user, professional) = store.seed_professional(UserRole::Professional, true);

        let message = service(&store)
            .change_status(ProfessionalStatus::Busy, &user)
            .await
            .unwrap();

        assert_eq!(message.message, "Status changed successfully!");
        assert_eq!(
            store.professional(professional.id).unwrap().status,
            ProfessionalStatus::Busy
        );
    }

    #[tokio::test]
    async fn change_status_requires_verified_account() {
        let store = InMemoryStore::default();
        let (user, professional) = store.seed_professional(UserRole::Professional, false);

        let result = service(&store)
            .change_status(ProfessionalStatus::Busy, &user)
            .await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::Forbidden("Please verify your account".to_string())
        );
        assert_eq!(
            store.professional(professional.id).unwrap().status,
            ProfessionalStatus::Active
        );
    }

    #[tokio::test]
    async fn change_status_rejects_company_accounts() {
        let store = InMemoryStore::default();
        let (user, _) = store.seed_company("Acme", true);

        let result = service(&store)
            .change_status(ProfessionalStatus::Busy, &user)
            .await;

        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
    }

    #[tokio::test]
    async fn update_applies_only_supplied_names() {
        let store = InMemoryStore::default();
        let (user, professional) = store.seed_professional(UserRole::Professional, true);

        let patch = ProfessionalPatch {
            last_name: Some("Ivanova".to_string()),
            ..Default::default()
        };
        let updated = service(&store).update(user.id, patch).await.unwrap();

        assert_eq!(updated.first_name, professional.first_name);
        assert_eq!(updated.last_name, "Ivanova");
    }

    #[tokio::test]
    async fn approved_listing_skips_unverified_owners() {
        let store = InMemoryStore::default();
        let (_, verified) = store.seed_professional(UserRole::Professional, true);
        store.seed_professional(UserRole::Professional, false);

        let listed = service(&store)
            .get_all_approved_professionals(ProfessionalFilter::default(), None, None)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, verified.id);
    }

    #[tokio::test]
    async fn approved_listing_filters_by_status_and_location() {
        let store = InMemoryStore::default();
        let (_, sofia) = store.seed_professional(UserRole::Professional, true);
        store.attach_info(sofia.clone(), "Rust", "Sofia");
        let (_, varna) = store.seed_professional(UserRole::Professional, true);
        store.attach_info(varna, "Go", "Varna");
        let (busy_user, busy) = store.seed_professional(UserRole::Professional, true);
        store.attach_info(busy, "Java", "sofia center");
        service(&store)
            .change_status(ProfessionalStatus::Busy, &busy_user)
            .await
            .unwrap();

        let filter = ProfessionalFilter {
            location: Some("SOFIA".to_string()),
            status: Some(ProfessionalStatus::Active),
            ..Default::default()
        };
        let listed = service(&store)
            .get_all_approved_professionals(filter, None, None)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, sofia.id);
    }

    #[tokio::test]
    async fn approved_listing_honours_page_size() {
        let store = InMemoryStore::default();
        for _ in 0..5 {
            store.seed_professional(UserRole::Professional, true);
        }

        let listed = service(&store)
            .get_all_approved_professionals(ProfessionalFilter::default(), Some(2), Some(2))
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn owner_deletes_professional_with_info_and_resumes() {
        let store = InMemoryStore::default();
        let (user, professional) = store.seed_professional(UserRole::Professional, true);
        let professional = store.attach_info(professional, "Rust", "Sofia");
        let info_id = professional.info_id.unwrap();
        store.seed_ad(info_id, AdStatus::Active);
        store.seed_ad(info_id, AdStatus::Private);

        service(&store)
            .delete_professional_by_id(professional.id, user.id)
            .await
            .unwrap();

        assert!(store.professional(professional.id).is_none());
        assert!(store.info(info_id).is_none());
        assert_eq!(store.ad_count(info_id), 0);
        assert!(store.user(user.id).is_none());
    }

    #[tokio::test]
    async fn admin_delete_removes_the_owner_account() {
        let store = InMemoryStore::default();
        let (owner, professional) = store.seed_professional(UserRole::Professional, true);
        let admin = store.seed_user(UserRole::Admin, true);

        service(&store)
            .delete_professional_by_id(professional.id, admin.id)
            .await
            .unwrap();

        assert!(store.professional(professional.id).is_none());
        assert!(store.user(owner.id).is_none());
        assert!(store.user(admin.id).is_some());
    }

    #[tokio::test]
    async fn stranger_cannot_delete_professional() {
        let store = InMemoryStore::default();
        let (_, professional) = store.seed_professional(UserRole::Professional, true);
        let (stranger, _) = store.seed_professional(UserRole::Professional, true);

        let result = service(&store)
            .delete_professional_by_id(professional.id, stranger.id)
            .await;

        assert_eq!(
            result.unwrap_err(),
            ServiceError::Forbidden(
                "Deletion of the professional is restricted to administrators or the professional owner."
                    .to_string()
            )
        );
        assert!(store.professional(professional.id).is_some());
    }
}
