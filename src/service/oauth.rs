use oauth2::{AuthorizationCode, CsrfToken, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::data::user::UserRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::user::UserDto;
use crate::state::OAuth2Client;

#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    email: Option<String>,
}

pub struct GoogleAuthService<'a> {
    db: &'a DatabaseConnection,
    oauth_client: &'a OAuth2Client,
    http_client: &'a reqwest::Client,
    userinfo_url: &'a str,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        oauth_client: &'a OAuth2Client,
        http_client: &'a reqwest::Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            oauth_client,
            http_client,
            userinfo_url,
        }
    }

    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(oauth2::Scope::new("openid".to_string()))
            .add_scope(oauth2::Scope::new("email".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Exchanges the authorization code, resolves the Google account's
    /// email, and logs in the matching local user. Accounts are never
    /// auto-provisioned here; an unknown email is rejected.
    pub async fn callback(&self, authorization_code: String) -> Result<UserDto, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::OAuthExchangeFailed(e.to_string()))?;

        let email = self.fetch_email(token.access_token().secret()).await?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::OAuthAccountNotLinked)?;

        let role = user_repo
            .find_with_role(user.id)
            .await?
            .and_then(|(_, role)| role);

        Ok(UserDto::from_parts(user, role))
    }

    async fn fetch_email(&self, access_token: &str) -> Result<String, AppError> {
        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?
            .json::<GoogleUserInfo>()
            .await?;

        user_info
            .email
            .ok_or_else(|| AuthError::OAuthExchangeFailed("No email in userinfo".to_string()).into())
    }
}
