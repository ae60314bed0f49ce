//! Mission lifecycle service.
//!
//! This module provides the `MissionService`, which loads missions, participations,
//! schedule counts and reports through the repositories and applies the rules from
//! [`progress`]. Every write runs inside a single database transaction and re-checks
//! existence inside it; the unique indexes on participation and report rows catch
//! any concurrent insert that slips past the check.

pub mod progress;

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::Status;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        category::MissionCategoryRepository, mission::MissionRepository,
        mission_user::MissionUserRepository, report::ReportRepository,
        schedule::ScheduleRepository,
    },
    error::{mission::MissionError, AppError},
    model::{
        category::MissionCategory,
        mission::{CreateMissionParams, Mission, MissionDetail, MissionHistory},
        report::{CreateReportParams, ReportTarget},
        schedule::ScheduleEntry,
    },
};

/// Service providing the mission lifecycle: listings, details, join, leave, report,
/// creation, deactivation and history.
pub struct MissionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    /// Creates a new MissionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MissionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every ACTIVE mission for the home page.
    pub async fn list_home(&self) -> Result<Vec<Mission>, AppError> {
        let missions = MissionRepository::new(self.db).get_active().await?;

        Ok(missions)
    }

    /// Lists every mission in a category, INACTIVE ones included.
    ///
    /// An unknown category yields an empty list.
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Mission>, AppError> {
        let missions = MissionRepository::new(self.db)
            .get_by_category(category_id)
            .await?;

        Ok(missions)
    }

    /// Lists all mission categories.
    pub async fn list_categories(&self) -> Result<Vec<MissionCategory>, AppError> {
        let categories = MissionCategoryRepository::new(self.db).get_all().await?;

        Ok(categories)
    }

    /// Lists the joined missions on which the user is still within the day budget.
    ///
    /// # Arguments
    /// - `user_id` - ID of the participant
    ///
    /// # Returns
    /// - `Ok(Vec<Mission>)` - Joined missions where the user's logged count is below
    ///   the day budget, ordered by mission ID
    /// - `Err(AppError::DbErr)` - Database error while loading rows
    pub async fn list_on_track(&self, user_id: i32) -> Result<Vec<Mission>, AppError> {
        let schedule_repo = ScheduleRepository::new(self.db);

        let mut on_track = Vec::new();
        for mission in self.joined_missions(user_id).await? {
            let logged = schedule_repo
                .count_by_mission_for_user(mission.id, user_id)
                .await?;

            let keep = progress::is_on_track(&mission, logged);
            tracing::debug!(
                "Mission {} for user {}: {} logged, on track: {}",
                mission.id,
                user_id,
                logged,
                keep
            );
            if keep {
                on_track.push(mission);
            }
        }

        Ok(on_track)
    }

    /// Lists the joined missions still running at `now`.
    ///
    /// # Arguments
    /// - `user_id` - ID of the participant
    /// - `now` - Instant to compare mission end dates against
    ///
    /// # Returns
    /// - `Ok(Vec<Mission>)` - Joined missions whose end date starts after `now`
    /// - `Err(AppError::DbErr)` - Database error while loading rows
    pub async fn list_mine(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Mission>, AppError> {
        let missions = self.joined_missions(user_id).await?;

        Ok(progress::filter_active_for_user(missions, now))
    }

    /// Loads a mission with its category title, without participant progress.
    ///
    /// # Returns
    /// - `Ok(MissionDetail)` - Mission found, `progress` is `None`
    /// - `Err(MissionError::MissionNotFound)` - No mission with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_mission(&self, mission_id: i32) -> Result<MissionDetail, AppError> {
        let Some((mission, category)) = MissionRepository::new(self.db)
            .find_with_category(mission_id)
            .await?
        else {
            return Err(MissionError::MissionNotFound(mission_id).into());
        };

        Ok(MissionDetail {
            mission,
            category_title: category.map(|c| c.title).unwrap_or_default(),
            progress: None,
        })
    }

    /// Loads a joined mission with the user's progress.
    ///
    /// The participation row is looked up first and the mission is then loaded by the
    /// ID it references.
    ///
    /// # Arguments
    /// - `user_id` - ID of the participant
    /// - `mission_id` - ID of the mission
    ///
    /// # Returns
    /// - `Ok(MissionDetail)` - Mission with category title and progress
    /// - `Err(MissionError::MissionNotFound)` - User has not joined, or the mission is gone
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_detail(&self, user_id: i32, mission_id: i32) -> Result<MissionDetail, AppError> {
        let Some(participation) = MissionUserRepository::new(self.db)
            .find(user_id, mission_id)
            .await?
        else {
            return Err(MissionError::MissionNotFound(mission_id).into());
        };

        let Some((mission, category)) = MissionRepository::new(self.db)
            .find_with_category(participation.mission_id)
            .await?
        else {
            return Err(MissionError::MissionNotFound(mission_id).into());
        };

        let logged = ScheduleRepository::new(self.db)
            .count_by_mission_for_user(mission.id, user_id)
            .await?;
        let progress = progress::progress(&mission, logged);

        Ok(MissionDetail {
            mission,
            category_title: category.map(|c| c.title).unwrap_or_default(),
            progress: Some(progress),
        })
    }

    /// Lists the user's schedule entries for a mission, ordered by start time.
    pub async fn get_schedule(
        &self,
        user_id: i32,
        mission_id: i32,
    ) -> Result<Vec<ScheduleEntry>, AppError> {
        let entries = ScheduleRepository::new(self.db)
            .get_by_mission_for_user(mission_id, user_id)
            .await?;

        Ok(entries)
    }

    /// Removes the user's participation in a mission.
    ///
    /// # Returns
    /// - `Ok(())` - Participation removed
    /// - `Err(MissionError::ParticipationNotFound)` - User had not joined the mission
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn leave(&self, user_id: i32, mission_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let participation_repo = MissionUserRepository::new(&txn);

        let Some(participation) = participation_repo.find(user_id, mission_id).await? else {
            return Err(MissionError::ParticipationNotFound {
                user_id,
                mission_id,
            }
            .into());
        };

        participation_repo.delete(participation.id).await?;
        txn.commit().await?;

        tracing::info!("User {} left mission {}", user_id, mission_id);

        Ok(())
    }

    /// Files a report by the user against a mission.
    ///
    /// # Returns
    /// - `Ok(())` - Report filed
    /// - `Err(MissionError::MissionNotFound)` - No mission with that ID
    /// - `Err(MissionError::AlreadyReported)` - User already reported this mission
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn report(&self, user_id: i32, mission_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let report_repo = ReportRepository::new(&txn);
        let target = ReportTarget::Mission(mission_id);

        if MissionRepository::new(&txn)
            .find_by_id(mission_id)
            .await?
            .is_none()
        {
            return Err(MissionError::MissionNotFound(mission_id).into());
        }

        progress::can_report(report_repo.exists(user_id, target).await?)?;

        let created = report_repo
            .create(CreateReportParams { user_id, target })
            .await;
        if let Err(err) = created {
            return Err(on_unique_violation(err, MissionError::AlreadyReported));
        }
        txn.commit().await?;

        tracing::info!("User {} reported mission {}", user_id, mission_id);

        Ok(())
    }

    /// Adds the user as a participant of a mission.
    ///
    /// # Returns
    /// - `Ok(())` - User joined
    /// - `Err(MissionError::MissionNotFound)` - No mission with that ID
    /// - `Err(MissionError::AlreadyJoined)` - User already participates
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn join(&self, user_id: i32, mission_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if MissionRepository::new(&txn)
            .find_by_id(mission_id)
            .await?
            .is_none()
        {
            return Err(MissionError::MissionNotFound(mission_id).into());
        }

        add_participant(&txn, user_id, mission_id).await?;
        txn.commit().await?;

        tracing::info!("User {} joined mission {}", user_id, mission_id);

        Ok(())
    }

    /// Creates a mission and joins its author to it.
    ///
    /// # Arguments
    /// - `user_id` - ID of the author, auto-joined to the new mission
    /// - `params` - Mission fields
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new mission
    /// - `Err(MissionError::InvalidDateRange)` - Start date after end date
    /// - `Err(AppError::NotFound)` - Category does not exist
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn create(&self, user_id: i32, params: CreateMissionParams) -> Result<i32, AppError> {
        progress::validate_date_range(params.start_at, params.end_at)?;

        let txn = self.db.begin().await?;

        if MissionCategoryRepository::new(&txn)
            .find_by_id(params.category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Mission category {} not found",
                params.category_id
            )));
        }

        let mission = MissionRepository::new(&txn).create(params).await?;
        add_participant(&txn, user_id, mission.id).await?;
        txn.commit().await?;

        tracing::info!("User {} created mission {}", user_id, mission.id);

        Ok(mission.id)
    }

    /// Marks a mission INACTIVE, removing it from the home listing.
    ///
    /// Deactivating an already inactive mission succeeds without changes.
    ///
    /// # Returns
    /// - `Ok(())` - Mission is INACTIVE
    /// - `Err(MissionError::MissionNotFound)` - No mission with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn deactivate(&self, mission_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let updated = MissionRepository::new(&txn)
            .set_status(mission_id, Status::Inactive)
            .await?;
        if !updated {
            return Err(MissionError::MissionNotFound(mission_id).into());
        }
        txn.commit().await?;

        tracing::info!("Mission {} deactivated", mission_id);

        Ok(())
    }

    /// Splits the user's finished missions into succeeded and failed.
    ///
    /// Missions still running on `today` are left out of both lists.
    pub async fn history(&self, user_id: i32, today: NaiveDate) -> Result<MissionHistory, AppError> {
        let schedule_repo = ScheduleRepository::new(self.db);

        let mut history = MissionHistory::default();
        for mission in self.joined_missions(user_id).await? {
            let logged = schedule_repo
                .count_by_mission_for_user(mission.id, user_id)
                .await?;

            if let Some(outcome) = progress::classify_outcome(&mission, logged, today) {
                history.record(mission, outcome);
            }
        }

        Ok(history)
    }

    /// Loads every mission the user has a participation row for.
    async fn joined_missions(&self, user_id: i32) -> Result<Vec<Mission>, DbErr> {
        let mission_ids: Vec<i32> = MissionUserRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .into_iter()
            .map(|p| p.mission_id)
            .collect();

        MissionRepository::new(self.db).get_by_ids(&mission_ids).await
    }
}

/// Inserts a participation row after checking none exists yet.
///
/// Must be called with an open transaction.
async fn add_participant<C: sea_orm::ConnectionTrait>(
    txn: &C,
    user_id: i32,
    mission_id: i32,
) -> Result<(), AppError> {
    let participation_repo = MissionUserRepository::new(txn);

    let existing = participation_repo.find(user_id, mission_id).await?;
    progress::can_join(existing.as_ref())?;

    if let Err(err) = participation_repo.create(user_id, mission_id).await {
        return Err(on_unique_violation(err, MissionError::AlreadyJoined));
    }

    Ok(())
}

/// Maps a unique-index violation to the given domain error, passing other errors through.
fn on_unique_violation(err: DbErr, conflict: MissionError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict.into(),
        _ => err.into(),
    }
}
