use crate::modules::profile::application::domain::entities::{Info, InfoFields, ProfileWithInfo};
use crate::modules::profile::application::ports::outgoing::{InfoRepository, InfoRepositoryError};
use crate::shared::errors::ServiceError;

pub const MISSING_INFO: &str = "Please edit your personal information.";

/// Live counters shown next to an Info record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoCounts {
    pub active_ads: u64,
    pub matches: u64,
}

/// Creates, attaches and updates the Info record of any profile role.
#[derive(Debug, Clone)]
pub struct InfoLifecycle<I>
where
    I: InfoRepository,
{
    info_repository: I,
}

impl<I> InfoLifecycle<I>
where
    I: InfoRepository,
{
    pub fn new(info_repository: I) -> Self {
        Self { info_repository }
    }

    pub async fn create_info<P>(&self, profile: &P, fields: InfoFields) -> Result<Info, ServiceError>
    where
        P: ProfileWithInfo,
    {
        let kind = profile.kind();
        let fields = fields.normalized();

        if !fields.has_required() {
            return Err(ServiceError::BadRequest(kind.missing_info_fields()));
        }

        if profile.info_id().is_some() {
            return Err(ServiceError::BadRequest("Info already exists".to_string()));
        }

        let info = self
            .info_repository
            .create_for_profile(kind, profile.id(), fields)
            .await?;

        tracing::info!(
            "Created info {} for {} {}",
            info.id,
            kind,
            profile.id()
        );

        Ok(info)
    }

    /// Falls back to [`Self::create_info`] while the profile has no Info yet.
    pub async fn update_info<P>(&self, profile: &P, fields: InfoFields) -> Result<Info, ServiceError>
    where
        P: ProfileWithInfo,
    {
        let fields = fields.normalized();

        let Some(info_id) = profile.info_id() else {
            return self.create_info(profile, fields).await;
        };

        if fields.is_empty() {
            return self.load_info(profile).await;
        }

        let info = self
            .info_repository
            .update(info_id, fields)
            .await
            .map_err(|e| match e {
                InfoRepositoryError::NotFound => ServiceError::NotFound(MISSING_INFO.to_string()),
                other => other.into(),
            })?;

        tracing::info!("Updated info {} of {} {}", info_id, profile.kind(), profile.id());

        Ok(info)
    }

    pub async fn load_info<P>(&self, profile: &P) -> Result<Info, ServiceError>
    where
        P: ProfileWithInfo,
    {
        let info_id = profile
            .info_id()
            .ok_or_else(|| ServiceError::NotFound(MISSING_INFO.to_string()))?;

        self.info_repository
            .find_by_id(info_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(MISSING_INFO.to_string()))
    }

    pub async fn load_info_with_counts<P>(
        &self,
        profile: &P,
    ) -> Result<(Info, InfoCounts), ServiceError>
    where
        P: ProfileWithInfo,
    {
        let info = self.load_info(profile).await?;

        let active_ads = self.info_repository.count_active_ads(info.id).await?;
        let matches = self
            .info_repository
            .count_matches(profile.kind(), profile.id())
            .await?;

        Ok((
            info,
            InfoCounts {
                active_ads,
                matches,
            },
        ))
    }
}
