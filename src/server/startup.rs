//! Start-up helpers that build the shared resources placed in `AppState`.

use axum::http::{header, HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity. Cookies are marked secure when the
/// application is served over HTTPS.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer with the session table migrated
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for Kakao requests.
///
/// Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Kakao OAuth2 client.
///
/// Kakao expects the client credentials in the token request body.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token and redirect URLs set
/// - `Err(ConfigError::InvalidValue)` - One of the URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.kakao_auth_url.clone())
        .map_err(|e| invalid_value("kakao_auth_url", e))?;
    let token_url = TokenUrl::new(config.kakao_token_url.clone())
        .map_err(|e| invalid_value("kakao_token_url", e))?;
    let redirect_url = RedirectUrl::new(config.kakao_redirect_url.clone())
        .map_err(|e| invalid_value("KAKAO_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.kakao_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.kakao_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url)
        .set_auth_type(AuthType::RequestBody);

    Ok(client)
}

/// Builds the CORS layer allowing credentialed requests from the front-end origin.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(config.app_url.trim_end_matches('/'))
        .map_err(|e| invalid_value("APP_URL", e))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

fn invalid_value(name: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
