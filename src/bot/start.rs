use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use serenity::async_trait;

use crate::bot::handler::Handler;
use crate::bot::shard::{Gateway, ShardManager, ShardSpec};
use crate::error::AppError;
use crate::service::update::spawn_update_check;
use crate::state::AppContext;

/// How long closed shards get to finish before the process exits anyway.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Gateway backed by one Serenity client per shard.
pub struct SerenityGateway {
    intents: GatewayIntents,
}

impl SerenityGateway {
    pub fn new(intents: GatewayIntents) -> Self {
        Self { intents }
    }
}

impl Default for SerenityGateway {
    fn default() -> Self {
        Self::new(GatewayIntents::non_privileged())
    }
}

#[async_trait]
impl Gateway for SerenityGateway {
    type Client = Client;
    type Handle = Arc<serenity::gateway::ShardManager>;

    async fn build(
        &self,
        token: &str,
        _shard: ShardSpec,
    ) -> Result<(Self::Client, Self::Handle), AppError> {
        let client = Client::builder(token, self.intents)
            .event_handler(Handler)
            .await?;
        let handle = Arc::clone(&client.shard_manager);

        Ok((client, handle))
    }

    /// Connects the shard and runs it until its shard manager is shut down
    async fn open(&self, mut client: Self::Client, shard: ShardSpec) -> Result<(), AppError> {
        client.start_shard(shard.index, shard.total).await?;

        Ok(())
    }

    async fn close(&self, handle: &Self::Handle) {
        handle.shutdown_all().await;
    }
}

/// Loads the application context, then runs the bot on `gateway`.
///
/// `load` runs before anything else, so a configuration failure returns before the update
/// check is spawned or any shard session is built.
///
/// # Arguments
/// - `load` - Builds the application context (environment, config, webhooks)
/// - `gateway` - Gateway the shard sessions are built on
///
/// # Returns
/// - `Ok(())` - Shards closed after a shutdown signal or on their own
/// - `Err(AppError)` - Startup failed or a shard failed
pub async fn run<G, F>(load: F, gateway: G) -> Result<(), AppError>
where
    G: Gateway,
    F: FnOnce() -> Result<AppContext, AppError>,
{
    let context = load().inspect_err(|e| tracing::error!("Startup failed: {}", e))?;

    spawn_update_check(
        context.http_client.clone(),
        context.config.release_api_url.clone(),
    );

    tracing::info!("Starting Discord bot");

    start_bot(&context, gateway)
        .await
        .inspect_err(|e| tracing::error!("Discord bot error: {}", e))
}

/// Runs every shard of the bot on `gateway` until one fails or the process receives Ctrl-C.
///
/// # Arguments
/// - `context` - Application context built at startup
/// - `gateway` - Gateway the shard sessions are built on
///
/// # Returns
/// - `Ok(())` - Shards closed after a shutdown signal or on their own
/// - `Err(AppError)` - A shard failed to build or lost its connection
pub async fn start_bot<G: Gateway>(context: &AppContext, gateway: G) -> Result<(), AppError> {
    let mut manager = ShardManager::new(
        gateway,
        context.config.discord_token.as_str(),
        context.config.shard_count,
    );

    manager.start_shards();

    tokio::select! {
        result = manager.wait() => result,
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutdown signal received, closing shards");

            manager.shutdown().await;

            match tokio::time::timeout(SHUTDOWN_GRACE, manager.wait()).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!("Shards did not close within {:?}", SHUTDOWN_GRACE);
                    Ok(())
                }
            }
        }
    }
}
