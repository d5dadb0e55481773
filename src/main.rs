use dioxus_logger::tracing::Level;

use shardbot::{
    bot::start::{run, SerenityGateway},
    config::Config,
    error::AppError,
    startup,
    state::AppContext,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    run(bootstrap, SerenityGateway::default()).await
}

/// Loads everything the bot needs before the first shard is launched.
fn bootstrap() -> Result<AppContext, AppError> {
    startup::load_environment()?;
    let config = Config::from_env()?;

    AppContext::load(config)
}
