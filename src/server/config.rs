use crate::server::error::{config::ConfigError, AppError};

const KAKAO_AUTH_URL: &str = "https://kauth.kakao.com/oauth/authorize";
const KAKAO_TOKEN_URL: &str = "https://kauth.kakao.com/oauth/token";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub kakao_client_id: String,
    pub kakao_client_secret: String,
    pub kakao_redirect_url: String,

    pub kakao_auth_url: String,
    pub kakao_token_url: String,

    /// Front-end origin, allowed by CORS and used as the post-login redirect.
    pub app_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            kakao_client_id: required_var("KAKAO_CLIENT_ID")?,
            kakao_client_secret: required_var("KAKAO_CLIENT_SECRET")?,
            kakao_redirect_url: required_var("KAKAO_REDIRECT_URL")?,
            kakao_auth_url: KAKAO_AUTH_URL.to_string(),
            kakao_token_url: KAKAO_TOKEN_URL.to_string(),
            app_url: required_var("APP_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
