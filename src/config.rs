use crate::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub app_url: String,
    pub frontend_origin: String,
    pub upload_dir: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    /// Face-assisted login is disabled when no API key is configured.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,

    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = require("APP_URL")?;

        // The redirect registered with the provider is normally this
        // service's own callback; OAUTH_REDIRECT_URL overrides it when a
        // proxy rewrites the public URL.
        let oauth_redirect_url = std::env::var("OAUTH_REDIRECT_URL")
            .unwrap_or_else(|_| default_redirect_url(&app_url));

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            app_url,
            frontend_origin: require("FRONTEND_ORIGIN")?,
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            oauth_client_id: require("OAUTH_CLIENT_ID")?,
            oauth_client_secret: require("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url,
            oauth_auth_url: GOOGLE_AUTH_URL.to_string(),
            oauth_token_url: GOOGLE_TOKEN_URL.to_string(),
            oauth_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| GEMINI_DEFAULT_MODEL.to_string()),
            admin_username: std::env::var("ADMIN_USERNAME").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn default_redirect_url(app_url: &str) -> String {
    format!(
        "{}/api/auth/oauth/callback",
        app_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn redirect_url_defaults_to_own_callback() {
        assert_eq!(
            default_redirect_url("https://campus.example.com"),
            "https://campus.example.com/api/auth/oauth/callback"
        );
        assert_eq!(
            default_redirect_url("https://campus.example.com/"),
            "https://campus.example.com/api/auth/oauth/callback"
        );
    }
}
