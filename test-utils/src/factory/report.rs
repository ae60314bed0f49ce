//! Report factory.

use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Files a report by the user against the mission.
pub async fn create_mission_report(
    db: &DatabaseConnection,
    user_id: i32,
    mission_id: i32,
) -> Result<entity::report::Model, DbErr> {
    let now = Utc::now();
    entity::report::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        mission_id: ActiveValue::Set(Some(mission_id)),
        status: ActiveValue::Set(Status::Active),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
