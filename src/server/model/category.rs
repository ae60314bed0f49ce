use crate::{model::mission::MissionCategoryDto, server::model::timestamps::Timestamps};

/// Grouping under which missions are browsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionCategory {
    pub id: i32,
    pub title: String,
    pub timestamps: Timestamps,
}

impl MissionCategory {
    pub fn from_entity(entity: entity::mission_category::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            timestamps: Timestamps::new(entity.created_at, entity.updated_at),
        }
    }

    pub fn into_dto(self) -> MissionCategoryDto {
        MissionCategoryDto {
            id: self.id,
            title: self.title,
        }
    }
}
