use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the documentation or `.env.example` file for required
    /// configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Configuration value was present but could not be parsed.
    #[error("Invalid configuration value for {0}: {1}")]
    InvalidValue(String, String),
}
