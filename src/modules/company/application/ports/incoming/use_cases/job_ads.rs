use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::application::domain::entities::{User, UserId};
use crate::modules::profile::application::domain::entities::{AdDeletion, AdSummary};
use crate::shared::api::StatusMessage;
use crate::shared::errors::ServiceError;

#[async_trait]
pub trait JobAdUseCase: Send + Sync {
    async fn get_job_ads(&self, user_id: UserId) -> Result<Vec<AdSummary>, ServiceError>;

    /// An unknown ad yields "Job ad not found" as a message, not an error.
    async fn setup_main_job_ad(&self, ad_id: Uuid, user: &User)
        -> Result<StatusMessage, ServiceError>;

    async fn delete_job_ad_by_id(&self, user: &User, ad_id: Uuid)
        -> Result<AdDeletion, ServiceError>;
}
