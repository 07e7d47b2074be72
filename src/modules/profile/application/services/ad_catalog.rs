use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    AdDeletion, AdSummary, MainAdOutcome, ProfileWithInfo,
};
use crate::modules::profile::application::ports::outgoing::{InfoRepository, InfoRepositoryError};
use crate::shared::errors::ServiceError;

/// Lists the ads filed under a profile's Info and manages its main ad.
#[derive(Debug, Clone)]
pub struct AdCatalog<I>
where
    I: InfoRepository,
{
    info_repository: I,
}

impl<I> AdCatalog<I>
where
    I: InfoRepository,
{
    pub fn new(info_repository: I) -> Self {
        Self { info_repository }
    }

    pub async fn list_ads<P>(&self, profile: &P) -> Result<Vec<AdSummary>, ServiceError>
    where
        P: ProfileWithInfo,
    {
        match profile.info_id() {
            None => Ok(Vec::new()),
            Some(info_id) => Ok(self.info_repository.list_ads(info_id).await?),
        }
    }

    pub async fn setup_main_ad<P>(
        &self,
        profile: &P,
        ad_id: Uuid,
    ) -> Result<MainAdOutcome, ServiceError>
    where
        P: ProfileWithInfo,
    {
        let Some(info_id) = profile.info_id() else {
            return Ok(MainAdOutcome::NotFound);
        };

        if !self.info_repository.set_main_ad(info_id, ad_id).await? {
            return Ok(MainAdOutcome::NotFound);
        }

        tracing::info!("Main ad of info {} set to {}", info_id, ad_id);
        Ok(MainAdOutcome::Changed)
    }

    pub async fn delete_ad<P>(&self, profile: &P, ad_id: Uuid) -> Result<AdDeletion, ServiceError>
    where
        P: ProfileWithInfo,
    {
        let kind = profile.kind();
        let info_id = profile
            .info_id()
            .ok_or_else(|| ServiceError::NotFound(kind.ad_not_found()))?;

        let deletion = self
            .info_repository
            .delete_ad(info_id, ad_id)
            .await
            .map_err(|e| match e {
                InfoRepositoryError::AdNotFound => ServiceError::NotFound(kind.ad_not_found()),
                other => other.into(),
            })?;

        tracing::info!("Deleted ad {} from info {} ({:?})", ad_id, info_id, deletion);
        Ok(deletion)
    }
}
