use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Status;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub start_at: Date,
    pub end_at: Date,
    pub last_mission: bool,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mission_category::Entity",
        from = "Column::CategoryId",
        to = "super::mission_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MissionCategory,
    #[sea_orm(has_many = "super::mission_user::Entity")]
    MissionUser,
    #[sea_orm(has_many = "super::mission_schedule::Entity")]
    MissionSchedule,
    #[sea_orm(has_many = "super::report::Entity")]
    Report,
}

impl Related<super::mission_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionCategory.def()
    }
}

impl Related<super::mission_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionUser.def()
    }
}

impl Related<super::mission_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionSchedule.def()
    }
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
