//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for Kakao API requests
//! - OAuth2 client for Kakao authentication
//! - Application URL for post-login redirects

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

/// Type alias for the OAuth2 client configured for Kakao authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection and `reqwest::Client` share
/// their pools, and the OAuth2 client is plain configuration.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, also backing the session store.
    pub db: DatabaseConnection,

    /// HTTP client for the token exchange and Kakao profile requests.
    ///
    /// Configured without redirect following.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Kakao login flow.
    pub oauth_client: OAuth2Client,

    /// Front-end URL users are sent to after logging in.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Kakao authentication
    /// - `app_url` - Front-end URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            app_url,
        }
    }
}
