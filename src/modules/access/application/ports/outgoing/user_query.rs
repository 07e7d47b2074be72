use async_trait::async_trait;

use crate::modules::access::application::domain::entities::{User, UserId};
use crate::shared::errors::ServiceError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted user row: {0}")]
    InvalidRow(String),
}

impl From<UserQueryError> for ServiceError {
    fn from(err: UserQueryError) -> Self {
        match err {
            UserQueryError::DatabaseError(msg) | UserQueryError::InvalidRow(msg) => {
                ServiceError::Repository(msg)
            }
        }
    }
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
}
