use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("Request made without an authenticated session")]
    UserNotInSession,

    /// Session references a user id that no longer exists.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role required for the endpoint.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Username unknown or password mismatch. Collapsed into one variant so
    /// the response does not reveal which half failed.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Captcha answer missing, expired, or wrong.
    #[error("Captcha verification failed")]
    CaptchaFailed,

    /// CSRF state validation failed during the OAuth callback.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// OAuth code exchange or userinfo fetch failed.
    #[error("OAuth exchange failed: {0}")]
    OAuthExchangeFailed(String),

    /// OAuth identity resolved to an email with no local account.
    #[error("No account is linked to this email address")]
    OAuthAccountNotLinked,

    /// Password reset token is malformed, expired, or its signature does not
    /// match one recomputed from the current password hash.
    #[error("Invalid or expired password reset token")]
    ResetTokenInvalid,

    /// The external comparison did not confirm the two photos match.
    #[error("Face verification failed")]
    FaceVerificationFailed,

    /// Face login attempted while no API key is configured.
    #[error("Face login is not configured on this server")]
    FaceLoginUnavailable,
}

/// Maps authentication errors to HTTP responses.
///
/// Client-facing messages stay generic; the precise cause is logged at debug
/// level server-side.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth error: {}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::CaptchaFailed => (StatusCode::BAD_REQUEST, "Captcha verification failed"),
            Self::CsrfValidationFailed | Self::OAuthExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::OAuthAccountNotLinked => (
                StatusCode::UNAUTHORIZED,
                "No account is linked to this email address",
            ),
            Self::ResetTokenInvalid => {
                (StatusCode::BAD_REQUEST, "Invalid or expired reset token")
            }
            Self::FaceVerificationFailed => (StatusCode::UNAUTHORIZED, "Face verification failed"),
            Self::FaceLoginUnavailable => (
                StatusCode::BAD_REQUEST,
                "Face login is not available on this server",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
