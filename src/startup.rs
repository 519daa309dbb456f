use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    model::user::{CreateUserParams, RoleName},
    service::auth,
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Must complete successfully before the application can accept requests.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same SQLite database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {e}")))?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the outbound HTTP client with redirects disabled.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the external login provider.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let invalid =
        |name: &str, e: url::ParseError| ConfigError::InvalidValue(name.to_string(), e.to_string());

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.oauth_auth_url.clone()).map_err(|e| invalid("OAUTH_AUTH_URL", e))?)
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone()).map_err(|e| invalid("OAUTH_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone())
                .map_err(|e| invalid("OAUTH_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Creates the upload directory tree if it does not exist.
pub async fn ensure_upload_dirs(config: &Config) -> Result<(), AppError> {
    for sub in ["materials", "certificates", "avatars"] {
        tokio::fs::create_dir_all(format!("{}/{}", config.upload_dir, sub)).await?;
    }

    Ok(())
}

/// Creates the bootstrap admin account when no admin exists yet.
///
/// Requires `ADMIN_USERNAME` and `ADMIN_PASSWORD` to be set; otherwise a
/// warning is logged and the server starts without an admin.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        tracing::warn!(
            "No admin account exists and ADMIN_USERNAME/ADMIN_PASSWORD are not set; \
             admin endpoints will be unreachable"
        );
        return Ok(());
    };

    let password_hash = auth::hash_password(password)?;
    repo.create(CreateUserParams {
        username: username.clone(),
        email: None,
        password_hash,
        full_name: "Administrator".to_string(),
        role: RoleName::Admin,
        date_of_birth: None,
        phone: None,
        address: None,
        enrollment_year: None,
        hire_date: None,
        specialization: None,
        occupation: None,
    })
    .await?;

    tracing::info!("Created bootstrap admin account '{}'", username);

    Ok(())
}
