use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{auth, mission, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Rabbit",
    description = "Mission progress and scheduling API"
))]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::rename_user, user::withdraw_user))
        .routes(routes!(user::get_mission_history))
        .routes(routes!(mission::get_home_missions, mission::create_mission))
        .routes(routes!(mission::get_categories))
        .routes(routes!(mission::get_category_missions))
        .routes(routes!(mission::get_on_track_missions))
        .routes(routes!(mission::get_my_missions))
        .routes(routes!(mission::get_mission))
        .routes(routes!(mission::get_my_mission, mission::leave_mission))
        .routes(routes!(mission::get_my_mission_schedules))
        .routes(routes!(mission::join_mission))
        .routes(routes!(mission::report_mission))
        .routes(routes!(mission::deactivate_mission))
        .split_for_parts();

    router.route(
        "/api/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
