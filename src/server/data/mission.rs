//! Mission data repository for database operations.
//!
//! Provides the `MissionRepository` for reading and creating missions and for
//! switching their status, converting entity models to domain models at the boundary.

use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    category::MissionCategory,
    mission::{CreateMissionParams, Mission},
};

/// Repository providing database operations for missions.
pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new MissionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `MissionRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a mission by its ID.
    ///
    /// # Arguments
    /// - `id` - ID of the mission
    ///
    /// # Returns
    /// - `Ok(Some(Mission))` - Mission found
    /// - `Ok(None)` - No mission with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Mission>, DbErr> {
        let entity = entity::prelude::Mission::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Mission::from_entity))
    }

    /// Finds a mission together with the category it belongs to.
    ///
    /// # Returns
    /// - `Ok(Some((Mission, Some(category))))` - Mission and its category found
    /// - `Ok(Some((Mission, None)))` - Mission found but its category row is gone
    /// - `Ok(None)` - No mission with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_category(
        &self,
        id: i32,
    ) -> Result<Option<(Mission, Option<MissionCategory>)>, DbErr> {
        let result = entity::prelude::Mission::find_by_id(id)
            .find_also_related(entity::prelude::MissionCategory)
            .one(self.db)
            .await?;

        Ok(result.map(|(mission, category)| {
            (
                Mission::from_entity(mission),
                category.map(MissionCategory::from_entity),
            )
        }))
    }

    /// Gets every ACTIVE mission, ordered by start date then ID.
    pub async fn get_active(&self) -> Result<Vec<Mission>, DbErr> {
        let entities = entity::prelude::Mission::find()
            .filter(entity::mission::Column::Status.eq(Status::Active))
            .order_by_asc(entity::mission::Column::StartAt)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mission::from_entity).collect())
    }

    /// Gets every mission of a single category regardless of status, ordered by start
    /// date then ID.
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Mission>, DbErr> {
        let entities = entity::prelude::Mission::find()
            .filter(entity::mission::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::mission::Column::StartAt)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mission::from_entity).collect())
    }

    /// Gets the missions with the given IDs, ordered by ID.
    ///
    /// IDs with no matching row are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<Mission>)` - Matching missions (returns early if `ids` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Mission>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Mission::find()
            .filter(entity::mission::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mission::from_entity).collect())
    }

    /// Creates a new ACTIVE mission.
    ///
    /// # Arguments
    /// - `params` - Category, title, content, date range and series flag
    ///
    /// # Returns
    /// - `Ok(Mission)` - The created mission
    /// - `Err(DbErr)` - Database error during insert (including a missing category)
    pub async fn create(&self, params: CreateMissionParams) -> Result<Mission, DbErr> {
        let now = Utc::now();
        let entity = entity::mission::ActiveModel {
            category_id: ActiveValue::Set(params.category_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            start_at: ActiveValue::Set(params.start_at),
            end_at: ActiveValue::Set(params.end_at),
            last_mission: ActiveValue::Set(params.last_mission),
            status: ActiveValue::Set(Status::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Mission::from_entity(entity))
    }

    /// Sets the status of a mission.
    ///
    /// # Returns
    /// - `Ok(true)` - Mission found and updated
    /// - `Ok(false)` - No mission with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: Status) -> Result<bool, DbErr> {
        let result = entity::prelude::Mission::update_many()
            .filter(entity::mission::Column::Id.eq(id))
            .col_expr(entity::mission::Column::Status, Expr::value(status))
            .col_expr(entity::mission::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
