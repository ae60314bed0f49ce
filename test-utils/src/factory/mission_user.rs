//! Mission participation factory.

use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participation rows.
pub struct MissionUserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    mission_id: i32,
    score: i32,
    status: Status,
}

impl<'a> MissionUserFactory<'a> {
    /// Creates a new factory for the (user, mission) pair with score 0 and ACTIVE status.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, mission_id: i32) -> Self {
        Self {
            db,
            user_id,
            mission_id,
            score: 0,
            status: Status::Active,
        }
    }

    /// Sets the participation score.
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Sets the participation status.
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the participation row into the database.
    pub async fn build(self) -> Result<entity::mission_user::Model, DbErr> {
        let now = Utc::now();
        entity::mission_user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            mission_id: ActiveValue::Set(self.mission_id),
            score: ActiveValue::Set(self.score),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Joins the user to the mission with default values.
pub async fn create_mission_user(
    db: &DatabaseConnection,
    user_id: i32,
    mission_id: i32,
) -> Result<entity::mission_user::Model, DbErr> {
    MissionUserFactory::new(db, user_id, mission_id).build().await
}
