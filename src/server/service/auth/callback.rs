use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::{
        auth::{KakaoAuthService, KAKAO_USER_INFO_URL},
        user::UserService,
    },
};

/// Subset of the Kakao `/v2/user/me` response.
#[derive(Debug, Deserialize)]
struct KakaoUser {
    id: i64,
    #[serde(default)]
    kakao_account: KakaoAccount,
}

#[derive(Debug, Default, Deserialize)]
struct KakaoAccount {
    email: Option<String>,
    #[serde(default)]
    profile: KakaoProfile,
}

#[derive(Debug, Default, Deserialize)]
struct KakaoProfile {
    nickname: Option<String>,
}

impl KakaoUser {
    fn into_params(self) -> CreateUserParams {
        let name = self
            .kakao_account
            .profile
            .nickname
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("rabbit{}", self.id));

        CreateUserParams {
            kakao_id: self.id,
            name,
            email: self.kakao_account.email,
        }
    }
}

impl<'a> KakaoAuthService<'a> {
    /// Exchanges the authorization code, fetches the Kakao profile and signs the user in.
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let kakao_user = self.fetch_kakao_user(&token).await?;

        UserService::new(self.db)
            .login(kakao_user.into_params())
            .await
    }

    /// Retrieves a Kakao user's profile using provided access token
    async fn fetch_kakao_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<KakaoUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(KAKAO_USER_INFO_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<KakaoUser>()
            .await?;

        Ok(user_info)
    }
}
