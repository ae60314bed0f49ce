use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionStatusDto {
    Active,
    Inactive,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MissionDto {
    pub id: i32,
    pub category_id: i32,
    pub title: String,
    pub content: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub last_mission: bool,
    pub status: MissionStatusDto,
}

/// Day-logging progress of the requesting user within a mission.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct MissionProgressDto {
    /// Maximum number of logged days, one per calendar day including both ends.
    pub day_budget: i64,
    pub logged_days: u64,
    pub on_track: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MissionDetailDto {
    #[serde(flatten)]
    pub mission: MissionDto,
    pub category_title: String,
    /// Present only when the detail was loaded for a participant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<MissionProgressDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateMissionDto {
    pub category_id: i32,
    pub title: String,
    pub content: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    #[serde(default)]
    pub last_mission: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct CreatedMissionDto {
    pub id: i32,
}

/// One logged day of a mission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct MissionScheduleDto {
    pub id: i32,
    pub title: String,
    /// Calendar day of the entry, formatted `yyyy-MM-dd`.
    pub when: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MissionHistoryDto {
    pub success_count: usize,
    pub failure_count: usize,
    pub succeeded: Vec<MissionDto>,
    pub failed: Vec<MissionDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct MissionCategoryDto {
    pub id: i32,
    pub title: String,
}
