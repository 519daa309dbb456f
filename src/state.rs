//! Application state shared across all request handlers.
//!
//! `AppState` holds the resources initialized once during startup and cloned
//! (cheaply) into each request handler through Axum's state extraction: the
//! database pool, the outbound HTTP client, the OAuth2 client, and the
//! application configuration.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Type alias for the OAuth2 client configured for the external login
/// provider (auth and token endpoints set, everything else unset).
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests (OAuth token exchange, userinfo
    /// fetch, face comparison). Redirects are disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the external login flow.
    pub oauth_client: OAuth2Client,

    /// Application configuration (upload root, external API keys, URLs).
    pub config: Config,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            config,
        }
    }
}
