use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        mission::{
            CreateMissionDto, CreatedMissionDto, MissionCategoryDto, MissionDetailDto, MissionDto,
            MissionScheduleDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            category::MissionCategory,
            mission::{CreateMissionParams, Mission},
            schedule::ScheduleEntry,
        },
        service::mission::MissionService,
        state::AppState,
    },
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

fn missions_into_dto(missions: Vec<Mission>) -> Vec<MissionDto> {
    missions.into_iter().map(Mission::into_dto).collect()
}

/// Get every active mission for the home page.
///
/// # Returns
/// - `200 OK` - Active missions ordered by start date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/missions",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Active missions", body = Vec<MissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_home_missions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let missions = MissionService::new(&state.db).list_home().await?;

    Ok((StatusCode::OK, Json(missions_into_dto(missions))))
}

/// Create a new mission.
///
/// The author is joined to the mission in the same transaction.
///
/// # Access Control
/// - Any logged in, active user
///
/// # Returns
/// - `201 Created` - ID of the new mission
/// - `400 Bad Request` - Start date after end date
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    responses(
        (status = 201, description = "Mission created", body = CreatedMissionDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateMissionParams::from_dto(payload);
    let id = MissionService::new(&state.db).create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(CreatedMissionDto { id })))
}

/// Get all mission categories.
#[utoipa::path(
    get,
    path = "/api/missions/categories",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Mission categories", body = Vec<MissionCategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = MissionService::new(&state.db).list_categories().await?;
    let categories: Vec<MissionCategoryDto> = categories
        .into_iter()
        .map(MissionCategory::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(categories)))
}

/// Get every mission in a category, inactive ones included.
///
/// An unknown category returns an empty list.
#[utoipa::path(
    get,
    path = "/api/missions/categories/{category_id}",
    tag = MISSION_TAG,
    params(
        ("category_id" = i32, Path, description = "Mission category ID")
    ),
    responses(
        (status = 200, description = "Missions in the category", body = Vec<MissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_missions(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let missions = MissionService::new(&state.db)
        .list_by_category(category_id)
        .await?;

    Ok((StatusCode::OK, Json(missions_into_dto(missions))))
}

/// Get the current user's joined missions that are still within their day budget.
#[utoipa::path(
    get,
    path = "/api/missions/on-track",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Joined missions still on track", body = Vec<MissionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_on_track_missions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let missions = MissionService::new(&state.db).list_on_track(user.id).await?;

    Ok((StatusCode::OK, Json(missions_into_dto(missions))))
}

/// Get the current user's joined missions that have not ended yet.
#[utoipa::path(
    get,
    path = "/api/missions/mine",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Running joined missions", body = Vec<MissionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_missions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let missions = MissionService::new(&state.db)
        .list_mine(user.id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(missions_into_dto(missions))))
}

/// Get a mission with its category title.
#[utoipa::path(
    get,
    path = "/api/missions/{mission_id}",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Mission", body = MissionDetailDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = MissionService::new(&state.db).get_mission(mission_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get a joined mission with the current user's progress.
///
/// # Returns
/// - `200 OK` - Mission with day budget, logged days and on-track flag
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - User has not joined the mission, or it does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/missions/mine/{mission_id}",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Mission with progress", body = MissionDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Mission not joined or not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_mission(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = MissionService::new(&state.db)
        .get_detail(user.id, mission_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get the days the current user logged against a mission, ordered by start.
#[utoipa::path(
    get,
    path = "/api/missions/mine/{mission_id}/schedules",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Logged days", body = Vec<MissionScheduleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_mission_schedules(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let entries = MissionService::new(&state.db)
        .get_schedule(user.id, mission_id)
        .await?;
    let entries: Vec<MissionScheduleDto> =
        entries.into_iter().map(ScheduleEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Leave a joined mission.
#[utoipa::path(
    delete,
    path = "/api/missions/mine/{mission_id}",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 204, description = "Left the mission"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Mission not joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_mission(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MissionService::new(&state.db)
        .leave(user.id, mission_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a mission.
#[utoipa::path(
    post,
    path = "/api/missions/{mission_id}/join",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 201, description = "Joined the mission"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 409, description = "Mission already joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_mission(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MissionService::new(&state.db)
        .join(user.id, mission_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Report a mission.
#[utoipa::path(
    post,
    path = "/api/missions/{mission_id}/report",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 201, description = "Report filed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 409, description = "Mission already reported", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn report_mission(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MissionService::new(&state.db)
        .report(user.id, mission_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Deactivate a mission, removing it from the home listing.
///
/// # Access Control
/// - `Admin` - Only admins can deactivate missions
#[utoipa::path(
    post,
    path = "/api/missions/{mission_id}/deactivate",
    tag = MISSION_TAG,
    params(
        ("mission_id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 204, description = "Mission deactivated"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_mission(
    State(state): State<AppState>,
    session: Session,
    Path(mission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MissionService::new(&state.db).deactivate(mission_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
