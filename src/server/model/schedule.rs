use chrono::NaiveDateTime;

use crate::{model::mission::MissionScheduleDto, server::model::timestamps::Timestamps};

/// A logged day of activity attached to a mission through the mission/schedule link.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub id: i32,
    /// Owner of the entry.
    pub user_id: i32,
    pub title: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub timestamps: Timestamps,
}

impl ScheduleEntry {
    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            start_at: entity.start_at,
            end_at: entity.end_at,
            timestamps: Timestamps::new(entity.created_at, entity.updated_at),
        }
    }

    /// Converts to the API shape, rendering the start day as `yyyy-MM-dd`.
    pub fn into_dto(self) -> MissionScheduleDto {
        MissionScheduleDto {
            id: self.id,
            title: self.title,
            when: self.start_at.format("%Y-%m-%d").to_string(),
        }
    }
}
