use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Caller-visible failures of mission lifecycle operations.
///
/// Produced both by the pure progress checks and by the lifecycle service when a
/// lookup comes back empty.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MissionError {
    /// Mission does not exist, or the user has no participation row for it.
    #[error("Mission {0} not found")]
    MissionNotFound(i32),

    /// User tried to leave a mission they never joined.
    #[error("User {user_id} is not participating in mission {mission_id}")]
    ParticipationNotFound { user_id: i32, mission_id: i32 },

    /// User already has a participation row for the mission.
    #[error("Mission already joined")]
    AlreadyJoined,

    /// User already reported the same target.
    #[error("Already reported")]
    AlreadyReported,

    /// Mission start date falls after its end date.
    #[error("Mission start date {start_at} is after end date {end_at}")]
    InvalidDateRange {
        start_at: chrono::NaiveDate,
        end_at: chrono::NaiveDate,
    },
}

/// # Returns
/// - 400 Bad Request - `InvalidDateRange`
/// - 404 Not Found - `MissionNotFound`, `ParticipationNotFound`
/// - 409 Conflict - `AlreadyJoined`, `AlreadyReported`
impl IntoResponse for MissionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissionNotFound(_) | Self::ParticipationNotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyJoined | Self::AlreadyReported => StatusCode::CONFLICT,
            Self::InvalidDateRange { .. } => StatusCode::BAD_REQUEST,
        };

        error_response(status, self)
    }
}
