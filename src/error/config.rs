use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file could not be found or parsed.
    ///
    /// Both binaries load their environment from a `.env` file in the working directory
    /// before reading any variable.
    #[error("Failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    /// Webhook configuration file could not be read.
    #[error("Failed to read webhook configuration '{}': {source}", .path.display())]
    WebhookFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Webhook configuration file is not a JSON object of `name -> { id, token }`.
    #[error("Failed to parse webhook configuration '{}': {source}", .path.display())]
    WebhookParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
