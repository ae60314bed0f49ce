//! Schedule data repository.
//!
//! Schedule entries are linked to missions through the `mission_schedule` table. All
//! queries here go through that link and are scoped to the owning user, so one
//! participant's logged days never count toward another's progress.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

use crate::server::model::schedule::ScheduleEntry;

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a schedule entry by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(ScheduleEntry))` - Entry found
    /// - `Ok(None)` - No entry with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ScheduleEntry>, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ScheduleEntry::from_entity))
    }

    /// Gets a user's schedule entries linked to a mission, ordered by start time.
    ///
    /// # Arguments
    /// - `mission_id` - ID of the mission the entries are linked to
    /// - `user_id` - ID of the user who logged the entries
    ///
    /// # Returns
    /// - `Ok(Vec<ScheduleEntry>)` - Linked entries, empty when nothing was logged
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_mission_for_user(
        &self,
        mission_id: i32,
        user_id: i32,
    ) -> Result<Vec<ScheduleEntry>, DbErr> {
        let entities = linked_to_mission(mission_id, user_id)
            .order_by_asc(entity::schedule::Column::StartAt)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ScheduleEntry::from_entity).collect())
    }

    /// Counts a user's schedule entries linked to a mission.
    pub async fn count_by_mission_for_user(
        &self,
        mission_id: i32,
        user_id: i32,
    ) -> Result<u64, DbErr> {
        linked_to_mission(mission_id, user_id)
            .count(self.db)
            .await
    }
}

fn linked_to_mission(mission_id: i32, user_id: i32) -> Select<entity::schedule::Entity> {
    entity::prelude::Schedule::find()
        .join(
            sea_orm::JoinType::InnerJoin,
            entity::schedule::Relation::MissionSchedule.def(),
        )
        .filter(entity::mission_schedule::Column::MissionId.eq(mission_id))
        .filter(entity::schedule::Column::UserId.eq(user_id))
}
