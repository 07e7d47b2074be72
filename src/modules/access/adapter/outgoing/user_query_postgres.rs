use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use super::sea_orm_entity::users::{Entity as UserEntity, Model as UserModel};
use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::modules::access::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> Result<User, UserQueryError> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(|e| UserQueryError::InvalidRow(e.to_string()))?;

        Ok(User {
            id: UserId::from(model.id),
            username: model.username,
            email: model.email,
            role,
            is_verified: model.is_verified,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_user).transpose()
    }
}
