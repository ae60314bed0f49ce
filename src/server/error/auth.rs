use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use oauth2::{basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session; the client is not logged in.
    #[error("No user found in session")]
    UserNotInSession,

    /// Session refers to a user id with no matching row.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The account has been withdrawn and can no longer authenticate.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// User lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of what was attempted, for server-side logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Authorization code could not be exchanged for an access token.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(
        #[from]
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; details are logged at debug level.
///
/// # Returns
/// - 400 Bad Request - CSRF failures
/// - 401 Unauthorized - No user in session, or session user no longer exists
/// - 403 Forbidden - Inactive user or missing permission
/// - 500 Internal Server Error - Token exchange failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InactiveUser(_) => {
                error_response(StatusCode::FORBIDDEN, "This account has been withdrawn")
            }
            Self::AccessDenied(_, _) => error_response(StatusCode::FORBIDDEN, "Access denied"),
            Self::CsrfValidationFailed => error_response(
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(err) => {
                tracing::error!("OAuth token exchange failed: {}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "There was an issue logging you in, please try again.",
                )
            }
        }
    }
}
