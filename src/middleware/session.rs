//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to one concern, preventing key typos and centralizing
//! session logic:
//! - `AuthSession` - authenticated user id and session lifecycle
//! - `CaptchaSession` - pending captcha answer for login/registration
//! - `CsrfSession` - CSRF token for the OAuth flow

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user_id";
const SESSION_CAPTCHA_ANSWER: &str = "captcha:answer";
const SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id after successful authentication.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Returns the logged-in user's id, or `None` when not authenticated.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all session data; used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Captcha challenge session management.
///
/// The expected answer never leaves the server; it is stored here when the
/// challenge is generated and removed on the first verification attempt so a
/// challenge cannot be brute-forced by replaying the same session.
pub struct CaptchaSession<'a> {
    session: &'a Session,
}

impl<'a> CaptchaSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the expected answer for the currently issued challenge.
    pub async fn set_answer(&self, answer: String) -> Result<(), AppError> {
        self.session.insert(SESSION_CAPTCHA_ANSWER, answer).await?;
        Ok(())
    }

    /// Retrieves and removes the expected answer.
    pub async fn take_answer(&self) -> Result<Option<String>, AppError> {
        let answer = self.session.remove(SESSION_CAPTCHA_ANSWER).await?;
        Ok(answer)
    }
}

/// CSRF protection for the OAuth flow.
///
/// The token is stored during login initiation and removed during callback
/// validation, so each token can only be used once.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_OAUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
