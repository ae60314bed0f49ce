//! Mission domain models and parameters.
//!
//! A mission is a time-boxed challenge spanning a closed range of calendar days.
//! Participants log at most one schedule entry per day; the models here carry the
//! mission itself, its enriched detail view, creation parameters, and the
//! per-user history split into succeeded and failed missions.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::Status;

use crate::{
    model::mission::{
        CreateMissionDto, MissionDetailDto, MissionDto, MissionHistoryDto, MissionProgressDto,
        MissionStatusDto,
    },
    server::model::timestamps::Timestamps,
};

/// A time-boxed challenge users join and log days against.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: i32,
    /// Category the mission is listed under.
    pub category_id: i32,
    pub title: String,
    pub content: String,
    /// First calendar day of the mission, inclusive.
    pub start_at: NaiveDate,
    /// Last calendar day of the mission, inclusive.
    pub end_at: NaiveDate,
    /// Whether this is the final mission of its series.
    pub last_mission: bool,
    pub status: Status,
    pub timestamps: Timestamps,
}

impl Mission {
    /// Converts an entity model to a mission domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The mission entity model from the database
    ///
    /// # Returns
    /// - `Mission` - The converted mission domain model
    pub fn from_entity(entity: entity::mission::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            title: entity.title,
            content: entity.content,
            start_at: entity.start_at,
            end_at: entity.end_at,
            last_mission: entity.last_mission,
            status: entity.status,
            timestamps: Timestamps::new(entity.created_at, entity.updated_at),
        }
    }

    /// Converts the mission domain model to a DTO for API responses.
    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            id: self.id,
            category_id: self.category_id,
            title: self.title,
            content: self.content,
            start_at: self.start_at,
            end_at: self.end_at,
            last_mission: self.last_mission,
            status: match self.status {
                Status::Active => MissionStatusDto::Active,
                Status::Inactive => MissionStatusDto::Inactive,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Day-logging progress of one participant within a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionProgress {
    /// Number of calendar days the mission spans, both ends included.
    pub day_budget: i64,
    /// Schedule entries the participant has logged against the mission.
    pub logged_days: u64,
    /// Whether the participant is still within the day budget.
    pub on_track: bool,
}

impl MissionProgress {
    pub fn into_dto(self) -> MissionProgressDto {
        MissionProgressDto {
            day_budget: self.day_budget,
            logged_days: self.logged_days,
            on_track: self.on_track,
        }
    }
}

/// Mission enriched with its category title and, for participants, their progress.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionDetail {
    pub mission: Mission,
    pub category_title: String,
    pub progress: Option<MissionProgress>,
}

impl MissionDetail {
    pub fn into_dto(self) -> MissionDetailDto {
        MissionDetailDto {
            mission: self.mission.into_dto(),
            category_title: self.category_title,
            progress: self.progress.map(MissionProgress::into_dto),
        }
    }
}

/// Parameters for creating a new mission.
#[derive(Debug, Clone)]
pub struct CreateMissionParams {
    pub category_id: i32,
    pub title: String,
    pub content: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub last_mission: bool,
}

impl CreateMissionParams {
    pub fn from_dto(dto: CreateMissionDto) -> Self {
        Self {
            category_id: dto.category_id,
            title: dto.title,
            content: dto.content,
            start_at: dto.start_at,
            end_at: dto.end_at,
            last_mission: dto.last_mission,
        }
    }
}

/// Final result of a mission for one participant, known once the mission has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    Succeeded,
    Failed,
}

/// A user's finished missions split by outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionHistory {
    pub succeeded: Vec<Mission>,
    pub failed: Vec<Mission>,
}

impl MissionHistory {
    /// Files a finished mission under the bucket matching its outcome.
    pub fn record(&mut self, mission: Mission, outcome: MissionOutcome) {
        match outcome {
            MissionOutcome::Succeeded => self.succeeded.push(mission),
            MissionOutcome::Failed => self.failed.push(mission),
        }
    }

    pub fn into_dto(self) -> MissionHistoryDto {
        MissionHistoryDto {
            success_count: self.succeeded.len(),
            failure_count: self.failed.len(),
            succeeded: self.succeeded.into_iter().map(Mission::into_dto).collect(),
            failed: self.failed.into_iter().map(Mission::into_dto).collect(),
        }
    }
}
