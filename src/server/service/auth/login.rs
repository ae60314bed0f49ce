use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::KakaoAuthService;

impl<'a> KakaoAuthService<'a> {
    /// Builds the Kakao authorize URL and the CSRF token to store in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("profile_nickname".to_string()))
            .add_scope(Scope::new("account_email".to_string()))
            .url()
    }
}
