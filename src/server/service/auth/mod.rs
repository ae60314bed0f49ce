//! OAuth2 login with Kakao

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

/// Kakao endpoint returning the signed-in account's profile.
pub const KAKAO_USER_INFO_URL: &str = "https://kapi.kakao.com/v2/user/me";

pub struct KakaoAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> KakaoAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }
}
