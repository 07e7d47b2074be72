use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::access::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(string_len = 100)]
    pub name: String,

    #[sea_orm(string_len = 255, nullable)]
    pub contacts: Option<String>,

    #[sea_orm(column_type = "Uuid", unique)]
    pub user_id: Uuid,

    // Null until the owner first edits their info
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
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
