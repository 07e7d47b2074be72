use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::companies::{self, ActiveModel, Column, Entity};
use crate::modules::access::adapter::outgoing::sea_orm_entity::users;
use crate::modules::access::application::domain::entities::UserId;
use crate::modules::company::application::domain::entities::{Company, CompanyPatch};
use crate::modules::company::application::ports::outgoing::{
    CompanyRepository, CompanyRepositoryError,
};
use crate::modules::profile::adapter::outgoing::{contains_pattern, delete_info_cascade};
use crate::modules::profile::application::domain::entities::PageRequest;

#[derive(Clone, Debug)]
pub struct CompanyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompanyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for CompanyRepositoryPostgres {
    async fn list_verified(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut query = Entity::find()
            .inner_join(users::Entity)
            .filter(users::Column::IsVerified.eq(true));

        if let Some(name) = name {
            query = query.filter(
                Expr::col((Entity, Column::Name)).ilike(contains_pattern(&name)),
            );
        }

        let models = query
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_company).collect())
    }

    async fn find_by_id(&self, company_id: Uuid) -> Result<Option<Company>, CompanyRepositoryError> {
        let model = Entity::find_by_id(company_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_company))
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Option<Company>, CompanyRepositoryError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_company))
    }

    async fn update(
        &self,
        company_id: Uuid,
        patch: CompanyPatch,
    ) -> Result<Company, CompanyRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = patch.name {
            model.name = Set(name);
        }

        if let Some(contacts) = patch.contacts {
            model.contacts = Set(Some(contacts));
        }

        if !(model.name.is_set() || model.contacts.is_set()) {
            return self
                .find_by_id(company_id)
                .await?
                .ok_or(CompanyRepositoryError::NotFound);
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(company_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(model_to_company)
            .ok_or(CompanyRepositoryError::NotFound)
    }

    async fn delete_with_info(
        &self,
        company_id: Uuid,
        info_id: Option<Uuid>,
    ) -> Result<(), CompanyRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let deleted = Entity::delete_by_id(company_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if deleted.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(CompanyRepositoryError::NotFound);
        }

        if let Some(info_id) = info_id {
            delete_info_cascade(&txn, info_id)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }
}

fn model_to_company(model: companies::Model) -> Company {
    Company {
        id: model.id,
        name: model.name,
        contacts: model.contacts,
        owner: UserId::from(model.user_id),
        info_id: model.info_id,
    }
}

fn map_db_err(e: DbErr) -> CompanyRepositoryError {
    CompanyRepositoryError::DatabaseError(e.to_string())
}
