use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::auth::KakaoAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Kakao for token exchange.
    pub code: String,
}

/// Start the Kakao login flow.
///
/// Stores a fresh CSRF token in the session and redirects to the Kakao authorize page.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Kakao login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = KakaoAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the Kakao login flow.
///
/// Validates the CSRF state, exchanges the code, signs the user in (creating them on
/// first login) and redirects to the application.
///
/// # Returns
/// - `307 Temporary Redirect` - Logged in, redirecting to the application
/// - `400 Bad Request` - CSRF state mismatch
/// - `403 Forbidden` - The Kakao account belongs to a withdrawn user
/// - `500 Internal Server Error` - Token exchange, profile fetch or database error
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by Kakao"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the application"),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 403, description = "Account has been withdrawn", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = KakaoAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.state).await?;

    let user = auth_service.callback(params.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(&state.app_url))
}

/// Log out the current user by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged in user.
///
/// # Returns
/// - `200 OK` - The signed-in user
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Account has been withdrawn
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account has been withdrawn", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
