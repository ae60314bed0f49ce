//! Schedule entry factory.
//!
//! Each created schedule entry is linked to its mission through a
//! `mission_schedule` row, mirroring what the daily check-in flow writes.

use crate::factory::helpers::next_id;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a logged schedule entry for a (user, mission) pair.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    mission_id: i32,
    title: String,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new factory with an entry logged today from 09:00 to 10:00.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, mission_id: i32) -> Self {
        let day = Utc::now().date_naive();
        Self {
            db,
            user_id,
            mission_id,
            title: format!("Schedule {}", next_id()),
            start_at: day.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)),
            end_at: day.and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN)),
        }
    }

    /// Sets the entry title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Moves the entry to the given calendar day, keeping its time of day.
    pub fn on(mut self, day: NaiveDate) -> Self {
        self.start_at = day.and_time(self.start_at.time());
        self.end_at = day.and_time(self.end_at.time());
        self
    }

    /// Builds the schedule entry and its mission link.
    ///
    /// # Returns
    /// - `Ok(entity::schedule::Model)` - Created schedule entity
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        let now = Utc::now();
        let schedule = entity::schedule::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(self.end_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::mission_schedule::ActiveModel {
            mission_id: ActiveValue::Set(self.mission_id),
            schedule_id: ActiveValue::Set(schedule.id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(schedule)
    }
}

/// Logs one schedule entry for the user against the mission.
pub async fn create_schedule(
    db: &DatabaseConnection,
    user_id: i32,
    mission_id: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, user_id, mission_id).build().await
}

/// Logs `count` entries on consecutive days starting at `first_day`.
pub async fn create_schedules(
    db: &DatabaseConnection,
    user_id: i32,
    mission_id: i32,
    first_day: NaiveDate,
    count: u64,
) -> Result<Vec<entity::schedule::Model>, DbErr> {
    let mut schedules = Vec::new();
    for offset in 0..count {
        let day = first_day
            .checked_add_days(Days::new(offset))
            .unwrap_or(first_day);
        schedules.push(
            ScheduleFactory::new(db, user_id, mission_id)
                .on(day)
                .build()
                .await?,
        );
    }
    Ok(schedules)
}
