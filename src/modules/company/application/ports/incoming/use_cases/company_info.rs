use async_trait::async_trait;

use crate::modules::access::application::domain::entities::{User, UserId};
use crate::modules::company::application::domain::entities::CompanyInfoDisplay;
use crate::modules::profile::application::domain::entities::{Info, InfoFields};
use crate::shared::errors::ServiceError;

#[async_trait]
pub trait CompanyInfoUseCase: Send + Sync {
    async fn create_company_info(
        &self,
        user: &User,
        description: Option<String>,
        location: Option<String>,
    ) -> Result<Info, ServiceError>;

    async fn edit_company_info(&self, user: &User, fields: InfoFields)
        -> Result<Info, ServiceError>;

    async fn get_info(&self, user_id: UserId) -> Result<CompanyInfoDisplay, ServiceError>;
}
