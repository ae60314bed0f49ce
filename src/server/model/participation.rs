use entity::sea_orm_active_enums::Status;

use crate::server::model::timestamps::Timestamps;

/// Record that a user joined a mission. At most one exists per (user, mission).
#[derive(Debug, Clone, PartialEq)]
pub struct MissionParticipation {
    pub id: i32,
    pub user_id: i32,
    pub mission_id: i32,
    /// Reserved for scoring; zero on join.
    pub score: i32,
    pub status: Status,
    pub timestamps: Timestamps,
}

impl MissionParticipation {
    pub fn from_entity(entity: entity::mission_user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            mission_id: entity.mission_id,
            score: entity.score,
            status: entity.status,
            timestamps: Timestamps::new(entity.created_at, entity.updated_at),
        }
    }
}
