use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::professionals::{self, ActiveModel, Column, Entity};
use crate::modules::access::adapter::outgoing::sea_orm_entity::users;
use crate::modules::access::application::domain::entities::UserId;
use crate::modules::professional::application::domain::entities::{
    Professional, ProfessionalFilter, ProfessionalPatch, ProfessionalStatus,
};
use crate::modules::professional::application::ports::outgoing::{
    ProfessionalRepository, ProfessionalRepositoryError,
};
use crate::modules::profile::adapter::outgoing::{contains_pattern, delete_info_cascade};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::info;
use crate::modules::profile::application::domain::entities::PageRequest;

#[derive(Clone, Debug)]
pub struct ProfessionalRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfessionalRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfessionalRepository for ProfessionalRepositoryPostgres {
    async fn list_approved(
        &self,
        filter: ProfessionalFilter,
        page: PageRequest,
    ) -> Result<Vec<Professional>, ProfessionalRepositoryError> {
        let mut query = Entity::find()
            .inner_join(users::Entity)
            .filter(users::Column::IsVerified.eq(true));

        if let Some(first_name) = filter.first_name {
            query = query.filter(
                Expr::col((Entity, Column::FirstName)).ilike(contains_pattern(&first_name)),
            );
        }

        if let Some(last_name) = filter.last_name {
            query = query.filter(
                Expr::col((Entity, Column::LastName)).ilike(contains_pattern(&last_name)),
            );
        }

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        // Location lives on the Info record, so only join it when asked
        if let Some(location) = filter.location {
            query = query.inner_join(info::Entity).filter(
                Expr::col((info::Entity, info::Column::Location))
                    .ilike(contains_pattern(&location)),
            );
        }

        let models = query
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::Id)
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_professional).collect()
    }

    async fn find_by_id(
        &self,
        professional_id: Uuid,
    ) -> Result<Option<Professional>, ProfessionalRepositoryError> {
        Entity::find_by_id(professional_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_professional)
            .transpose()
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<Professional>, ProfessionalRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_professional)
            .transpose()
    }

    async fn update(
        &self,
        professional_id: Uuid,
        patch: ProfessionalPatch,
    ) -> Result<Professional, ProfessionalRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(first_name) = patch.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = patch.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(status) = patch.status {
            model.status = Set(status.as_str().to_string());
        }

        let has_changes =
            model.first_name.is_set() || model.last_name.is_set() || model.status.is_set();

        if !has_changes {
            return self
                .find_by_id(professional_id)
                .await?
                .ok_or(ProfessionalRepositoryError::NotFound);
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(professional_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .ok_or(ProfessionalRepositoryError::NotFound)
            .and_then(model_to_professional)
    }

    async fn delete_with_account(
        &self,
        professional: &Professional,
    ) -> Result<(), ProfessionalRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let deleted = Entity::delete_by_id(professional.id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if deleted.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(ProfessionalRepositoryError::NotFound);
        }

        users::Entity::delete_by_id(professional.owner.value())
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if let Some(info_id) = professional.info_id {
            delete_info_cascade(&txn, info_id)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }
}

fn model_to_professional(
    model: professionals::Model,
) -> Result<Professional, ProfessionalRepositoryError> {
    let status = model
        .status
        .parse::<ProfessionalStatus>()
        .map_err(|e| ProfessionalRepositoryError::InvalidRow(e.to_string()))?;

    Ok(Professional {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        status,
        owner: UserId::from(model.user_id),
        info_id: model.info_id,
    })
}

fn map_db_err(e: DbErr) -> ProfessionalRepositoryError {
    ProfessionalRepositoryError::DatabaseError(e.to_string())
}
