use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::category::MissionCategory;

pub struct MissionCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a category by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MissionCategory>, DbErr> {
        let entity = entity::prelude::MissionCategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MissionCategory::from_entity))
    }

    /// Gets all categories ordered by title
    pub async fn get_all(&self) -> Result<Vec<MissionCategory>, DbErr> {
        let entities = entity::prelude::MissionCategory::find()
            .order_by_asc(entity::mission_category::Column::Title)
            .order_by_asc(entity::mission_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MissionCategory::from_entity)
            .collect())
    }
}
