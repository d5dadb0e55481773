use std::{path::Path, time::Duration};

use dioxus_logger::tracing;

use crate::{
    error::{config::ConfigError, AppError},
    model::webhook::WebhookRegistry,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads variables from the `.env` file in the working directory into the process
/// environment.
///
/// A missing or malformed file is fatal: configuration is all-or-nothing at startup.
pub fn load_environment() -> Result<(), AppError> {
    dotenvy::dotenv().map_err(ConfigError::from)?;
    Ok(())
}

/// Loads the webhook definitions from the JSON configuration file at `path`.
///
/// # Returns
/// - `Ok(WebhookRegistry)` - Every webhook defined in the file
/// - `Err(ConfigError::WebhookFile)` - File is missing or unreadable
/// - `Err(ConfigError::WebhookParse)` - File is not a JSON object of `name -> { id, token }`
pub fn load_webhooks(path: &Path) -> Result<WebhookRegistry, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::WebhookFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_webhooks(path, &contents)
}

fn parse_webhooks(path: &Path, contents: &str) -> Result<WebhookRegistry, AppError> {
    let webhooks = serde_json::from_str(contents).map_err(|source| ConfigError::WebhookParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(webhooks)
}

/// Connects to the badge database and runs pending migrations.
///
/// The connect attempt is bounded by `connect_timeout`. Migrations create the badge table
/// on first use so the tool works against an empty database. If they fail, the connection
/// is closed before the error is returned.
///
/// # Arguments
/// - `database_url` - SeaORM connection string
/// - `connect_timeout` - Upper bound for establishing the connection
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
    connect_timeout: Duration,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.connect_timeout(connect_timeout).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if let Err(e) = Migrator::up(&db, None).await {
        if let Err(close_err) = db.close().await {
            tracing::warn!("Failed to close database after migration error: {}", close_err);
        }
        return Err(e.into());
    }

    Ok(db)
}

/// Builds the HTTP client used for outbound API calls.
///
/// GitHub rejects requests without a `User-Agent`, so the crate name and version are sent.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}
