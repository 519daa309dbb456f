use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
    /// Answer to the captcha previously fetched via `/api/auth/captcha`.
    pub captcha: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub captcha: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

/// Face-assisted login payload. `image` is the captured frame as a base64
/// data URL or bare base64 string.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FaceLoginDto {
    pub username: String,
    pub image: String,
}
