//! Mission factory for creating test mission entities.
//!
//! Missions default to an ACTIVE two-week window starting today, so they show up
//! on the home listing and in a user's current missions unless a test overrides
//! the dates.

use crate::factory::helpers::next_id;
use chrono::{Days, NaiveDate, Utc};
use entity::sea_orm_active_enums::Status;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test missions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mission::MissionFactory;
///
/// let mission = MissionFactory::new(&db, category.id)
///     .title("Morning run")
///     .status(Status::Inactive)
///     .build()
///     .await?;
/// ```
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    title: String,
    content: String,
    start_at: NaiveDate,
    end_at: NaiveDate,
    last_mission: bool,
    status: Status,
}

impl<'a> MissionFactory<'a> {
    /// Creates a new MissionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Mission {id}"`
    /// - content: `"Content for mission {id}"`
    /// - start_at: today (UTC)
    /// - end_at: today + 14 days
    /// - last_mission: `false`
    /// - status: `Status::Active`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - ID of the category the mission belongs to
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            category_id,
            title: format!("Mission {}", id),
            content: format!("Content for mission {}", id),
            start_at: today,
            end_at: today.checked_add_days(Days::new(14)).unwrap_or(today),
            last_mission: false,
            status: Status::Active,
        }
    }

    /// Sets the mission title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the mission content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the first day of the mission.
    pub fn start_at(mut self, start_at: NaiveDate) -> Self {
        self.start_at = start_at;
        self
    }

    /// Sets the last day of the mission.
    pub fn end_at(mut self, end_at: NaiveDate) -> Self {
        self.end_at = end_at;
        self
    }

    /// Marks the mission as the last of its category's sequence.
    pub fn last_mission(mut self, last_mission: bool) -> Self {
        self.last_mission = last_mission;
        self
    }

    /// Sets the mission status.
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the mission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mission::Model)` - Created mission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        let now = Utc::now();
        entity::mission::ActiveModel {
            category_id: ActiveValue::Set(self.category_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(self.end_at),
            last_mission: ActiveValue::Set(self.last_mission),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission with default values in the given category.
pub async fn create_mission(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db, category_id).build().await
}

/// Creates a mission spanning the given dates in the given category.
pub async fn create_mission_between(
    db: &DatabaseConnection,
    category_id: i32,
    start_at: NaiveDate,
    end_at: NaiveDate,
) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db, category_id)
        .start_at(start_at)
        .end_at(end_at)
        .build()
        .await
}
