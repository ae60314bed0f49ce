use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::participation::MissionParticipation;

/// Repository for the user/mission participation rows.
pub struct MissionUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the participation of a user in a mission.
    ///
    /// # Returns
    /// - `Ok(Some(MissionParticipation))` - The user joined the mission
    /// - `Ok(None)` - The user has no participation row for the mission
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        user_id: i32,
        mission_id: i32,
    ) -> Result<Option<MissionParticipation>, DbErr> {
        let entity = entity::prelude::MissionUser::find()
            .filter(entity::mission_user::Column::UserId.eq(user_id))
            .filter(entity::mission_user::Column::MissionId.eq(mission_id))
            .one(self.db)
            .await?;

        Ok(entity.map(MissionParticipation::from_entity))
    }

    /// Gets every participation row of a user, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<MissionParticipation>, DbErr> {
        let entities = entity::prelude::MissionUser::find()
            .filter(entity::mission_user::Column::UserId.eq(user_id))
            .order_by_asc(entity::mission_user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MissionParticipation::from_entity)
            .collect())
    }

    /// Inserts an ACTIVE participation row with a zero score.
    ///
    /// # Returns
    /// - `Ok(MissionParticipation)` - The created row
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   user already joined the mission
    pub async fn create(
        &self,
        user_id: i32,
        mission_id: i32,
    ) -> Result<MissionParticipation, DbErr> {
        let now = Utc::now();
        let entity = entity::mission_user::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            mission_id: ActiveValue::Set(mission_id),
            score: ActiveValue::Set(0),
            status: ActiveValue::Set(Status::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MissionParticipation::from_entity(entity))
    }

    /// Deletes a participation row by its ID.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted (or it did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MissionUser::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
