use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::access::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::info;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professionals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(string_len = 50)]
    pub first_name: String,

    #[sea_orm(string_len = 50)]
    pub last_name: String,

    // active | busy
    #[sea_orm(string_len = 20)]
    pub status: String,

    #[sea_orm(column_type = "Uuid", unique)]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub info_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::access::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::access::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        belongs_to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::info::Entity",
        from = "Column::InfoId",
        to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::info::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Info,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Info.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
