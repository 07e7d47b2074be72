use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(string_len = 100)]
    pub location: String,

    // active | hidden | private | matched | archived
    #[sea_orm(string_len = 20)]
    pub status: String,

    pub min_salary: i32,
    pub max_salary: i32,

    #[sea_orm(column_type = "Uuid")]
    pub info_id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::info::Entity",
        from = "Column::InfoId",
        to = "super::info::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Info,
}

impl Related<super::info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Info.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
