//! Mission category factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mission categories.
pub struct MissionCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
}

impl<'a> MissionCategoryFactory<'a> {
    /// Creates a new factory with title `"Category {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Category {}", next_id()),
        }
    }

    /// Sets the category title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::mission_category::Model, DbErr> {
        let now = Utc::now();
        entity::mission_category::ActiveModel {
            title: ActiveValue::Set(self.title),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::mission_category::Model, DbErr> {
    MissionCategoryFactory::new(db).build().await
}
