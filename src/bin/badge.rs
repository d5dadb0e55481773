//! Developer badge tool.
//!
//! Grants the `DEVELOPER` flag to a user record:
//!
//! ```text
//! badge <USER_ID>
//! ```
//!
//! Reads `MONGO_TOKEN` from the environment or a `.env` file. Exits with code 1 on any
//! failure, including a missing user ID.

use std::process::ExitCode;
use std::time::Duration;

use clap::{error::ErrorKind, Parser};
use dioxus_logger::tracing::{self, Level};

use shardbot::{
    config::BadgeConfig,
    error::AppError,
    model::badge::{BadgeGrant, DEVELOPER_FLAG},
    service::badge::BadgeService,
    startup,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Grant the developer badge to a Discord user.
#[derive(Parser, Debug)]
#[command(name = "badge", version)]
struct Cli {
    /// ID of the member receiving the badge
    user_id: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("[ERROR] >> Developer Badge >> Please provide a member ID!");
            eprintln!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    match run(&cli.user_id).await {
        Ok(grant) => {
            tracing::debug!("Badge grant result: {:?}", grant);
            println!(
                "[SUCCESS] >> Developer Badge has been added to the user: {}",
                cli.user_id
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("[ERROR] >> Developer Badge >> {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Connects to the badge database and grants the developer flag.
///
/// The connection is closed before returning, whether or not the grant succeeded.
async fn run(user_id: &str) -> Result<BadgeGrant, AppError> {
    startup::load_environment()?;
    let config = BadgeConfig::from_env()?;

    let db = startup::connect_to_database(&config.database_url, CONNECT_TIMEOUT).await?;
    tracing::info!("[SUCCESS] >> Developer Badge >> Connected to the database!");

    let grant = BadgeService::new(&db).grant(user_id, DEVELOPER_FLAG).await;
    let closed = db.close().await;

    let grant = grant?;
    closed?;

    Ok(grant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_user_id() {
        let err = Cli::try_parse_from(["badge"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_user_id() {
        let cli = Cli::try_parse_from(["badge", "123456789"]).unwrap();

        assert_eq!(cli.user_id, "123456789");
    }
}
