use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ads, info, job_matches};
use crate::modules::company::adapter::outgoing::sea_orm_entity::companies;
use crate::modules::professional::adapter::outgoing::sea_orm_entity::professionals;
use crate::modules::profile::application::domain::entities::{
    AdDeletion, AdStatus, AdSummary, Info, InfoFields, ProfileKind,
};
use crate::modules::profile::application::ports::outgoing::{InfoRepository, InfoRepositoryError};

#[derive(Clone, Debug)]
pub struct InfoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InfoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Points the profile row at `info_id`, provided it has no Info yet.
    async fn link_profile<C>(
        conn: &C,
        kind: ProfileKind,
        profile_id: Uuid,
        info_id: Uuid,
    ) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = match kind {
            ProfileKind::Company => {
                companies::Entity::update_many()
                    .col_expr(companies::Column::InfoId, Expr::value(info_id))
                    .filter(companies::Column::Id.eq(profile_id))
                    .filter(companies::Column::InfoId.is_null())
                    .exec(conn)
                    .await?
            }
            ProfileKind::Professional => {
                professionals::Entity::update_many()
                    .col_expr(professionals::Column::InfoId, Expr::value(info_id))
                    .filter(professionals::Column::Id.eq(profile_id))
                    .filter(professionals::Column::InfoId.is_null())
                    .exec(conn)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }
}

/// Removes an Info record together with every ad filed under it.
///
/// Runs on whatever connection it is handed so profile deletion can call it
/// inside its own transaction.
pub(crate) async fn delete_info_cascade<C>(conn: &C, info_id: Uuid) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    ads::Entity::delete_many()
        .filter(ads::Column::InfoId.eq(info_id))
        .exec(conn)
        .await?;

    info::Entity::delete_by_id(info_id).exec(conn).await?;

    Ok(())
}

#[async_trait]
impl InfoRepository for InfoRepositoryPostgres {
    async fn find_by_id(&self, info_id: Uuid) -> Result<Option<Info>, InfoRepositoryError> {
        let model = info::Entity::find_by_id(info_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_info))
    }

    async fn create_for_profile(
        &self,
        kind: ProfileKind,
        profile_id: Uuid,
        fields: InfoFields,
    ) -> Result<Info, InfoRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = info::ActiveModel {
            id: Set(Uuid::new_v4()),
            description: Set(fields.description),
            location: Set(fields.location),
            picture: Set(fields.picture),
            main_ad: Set(None),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        let linked = Self::link_profile(&txn, kind, profile_id, inserted.id)
            .await
            .map_err(map_db_err)?;

        if linked == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(InfoRepositoryError::ProfileUnavailable);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_info(inserted))
    }

    async fn update(&self, info_id: Uuid, fields: InfoFields) -> Result<Info, InfoRepositoryError> {
        let mut model = <info::ActiveModel as Default>::default();

        if let Some(description) = fields.description {
            model.description = Set(Some(description));
        }

        if let Some(location) = fields.location {
            model.location = Set(Some(location));
        }

        if let Some(picture) = fields.picture {
            model.picture = Set(Some(picture));
        }

        let has_changes =
            model.description.is_set() || model.location.is_set() || model.picture.is_set();

        if !has_changes {
            return self
                .find_by_id(info_id)
                .await?
                .ok_or(InfoRepositoryError::NotFound);
        }

        let updated = info::Entity::update_many()
            .set(model)
            .filter(info::Column::Id.eq(info_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(model_to_info)
            .ok_or(InfoRepositoryError::NotFound)
    }

    async fn count_active_ads(&self, info_id: Uuid) -> Result<u64, InfoRepositoryError> {
        ads::Entity::find()
            .filter(ads::Column::InfoId.eq(info_id))
            .filter(ads::Column::Status.eq(AdStatus::Active.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_matches(
        &self,
        kind: ProfileKind,
        profile_id: Uuid,
    ) -> Result<u64, InfoRepositoryError> {
        let column = match kind {
            ProfileKind::Company => job_matches::Column::CompanyId,
            ProfileKind::Professional => job_matches::Column::ProfessionalId,
        };

        job_matches::Entity::find()
            .filter(column.eq(profile_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list_ads(&self, info_id: Uuid) -> Result<Vec<AdSummary>, InfoRepositoryError> {
        let models = ads::Entity::find()
            .filter(ads::Column::InfoId.eq(info_id))
            .order_by_asc(ads::Column::CreatedAt)
            .order_by_asc(ads::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_ad_summary).collect()
    }

    async fn set_main_ad(&self, info_id: Uuid, ad_id: Uuid) -> Result<bool, InfoRepositoryError> {
        // Ownership check and update in one statement
        let owned_ad = Query::select()
            .expr(Expr::val(1))
            .from(ads::Entity)
            .and_where(Expr::col((ads::Entity, ads::Column::Id)).eq(ad_id))
            .and_where(Expr::col((ads::Entity, ads::Column::InfoId)).eq(info_id))
            .to_owned();

        let result = info::Entity::update_many()
            .col_expr(info::Column::MainAd, Expr::value(ad_id))
            .filter(info::Column::Id.eq(info_id))
            .filter(Expr::exists(owned_ad))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_ad(
        &self,
        info_id: Uuid,
        ad_id: Uuid,
    ) -> Result<AdDeletion, InfoRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let ad = ads::Entity::find_by_id(ad_id)
            .filter(ads::Column::InfoId.eq(info_id))
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        if ad.is_none() {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(InfoRepositoryError::AdNotFound);
        }

        let was_main = info::Entity::find_by_id(info_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .and_then(|owner| owner.main_ad)
            == Some(ad_id);

        if was_main {
            info::Entity::update_many()
                .col_expr(info::Column::MainAd, Expr::value(Option::<Uuid>::None))
                .filter(info::Column::Id.eq(info_id))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
        }

        ads::Entity::delete_by_id(ad_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(if was_main {
            AdDeletion::DeletedAndMainCleared
        } else {
            AdDeletion::Deleted
        })
    }
}

fn model_to_info(model: info::Model) -> Info {
    Info {
        id: model.id,
        description: model.description,
        location: model.location,
        picture: model.picture,
        main_ad: model.main_ad,
    }
}

fn model_to_ad_summary(model: ads::Model) -> Result<AdSummary, InfoRepositoryError> {
    let status = model
        .status
        .parse::<AdStatus>()
        .map_err(|e| InfoRepositoryError::InvalidRow(e.to_string()))?;

    Ok(AdSummary {
        id: model.id,
        description: model.description,
        location: model.location,
        status,
        min_salary: model.min_salary,
        max_salary: model.max_salary,
    })
}

fn map_db_err(e: DbErr) -> InfoRepositoryError {
    InfoRepositoryError::DatabaseError(e.to_string())
}
