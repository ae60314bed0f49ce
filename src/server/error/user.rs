use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    /// No user exists with the given id.
    #[error("User {0} not found")]
    UserNotFound(i32),

    /// Another user already uses the requested display name.
    #[error("Name '{0}' is already in use")]
    DuplicateName(String),
}

/// # Returns
/// - 404 Not Found - `UserNotFound`
/// - 409 Conflict - `DuplicateName`
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateName(_) => StatusCode::CONFLICT,
        };

        error_response(status, self)
    }
}
