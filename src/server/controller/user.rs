use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        mission::MissionHistoryDto,
        user::{UpdateUserNameDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::{mission::MissionService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Rename the current user.
///
/// # Returns
/// - `200 OK` - User with the new name
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Name already used by another user
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateUserNameDto,
    responses(
        (status = 200, description = "User renamed", body = UserDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .rename(user.id, &payload.name)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Withdraw the current user's account and end their session.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account withdrawn"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db).withdraw(user.id).await?;
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the current user's finished missions split into succeeded and failed.
#[utoipa::path(
    get,
    path = "/api/users/me/missions/history",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Mission history", body = MissionHistoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let history = MissionService::new(&state.db)
        .history(user.id, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(history.into_dto())))
}
