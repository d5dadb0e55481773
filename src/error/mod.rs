//! Error types shared by the bot and the badge tool.
//!
//! `AppError` is the top-level error returned from every fallible operation. Configuration
//! problems are grouped under `ConfigError` so startup failures read the same way in both
//! binaries.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so that `?` can be used at every
/// layer. Every variant is fatal to the process that produced it except when raised by the
/// update check, which only logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Raised by the release check when the endpoint is unreachable, answers with a
    /// non-success status or returns a body without `tag_name`.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A shard task panicked or was cancelled before reporting a result.
    #[error("Shard task failed: {0}")]
    ShardTaskErr(#[from] tokio::task::JoinError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
