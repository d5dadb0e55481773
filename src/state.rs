//! Application context shared by the bot's components.
//!
//! The context is built once at startup from the loaded configuration and then passed by
//! reference to whatever needs it. Nothing in the crate keeps process-wide mutable state.

use dioxus_logger::tracing;

use crate::{
    config::Config, error::AppError, model::webhook::WebhookRegistry, startup,
};

/// Configuration and shared resources of the bot process.
pub struct AppContext {
    /// Configuration read from the environment.
    pub config: Config,

    /// Webhooks loaded from the webhook configuration file.
    pub webhooks: WebhookRegistry,

    /// HTTP client for outbound API requests such as the release check.
    pub http_client: reqwest::Client,
}

impl AppContext {
    /// Loads the webhook configuration and builds the shared HTTP client.
    ///
    /// # Arguments
    /// - `config` - Configuration read from the environment
    ///
    /// # Returns
    /// - `Ok(AppContext)` - Context ready to start the bot
    /// - `Err(AppError::ConfigErr)` - Webhook file missing or invalid
    /// - `Err(AppError::ReqwestErr)` - HTTP client could not be built
    pub fn load(config: Config) -> Result<Self, AppError> {
        let webhooks = startup::load_webhooks(&config.webhook_config_path)?;
        tracing::info!(
            "Loaded {} webhook(s): {}",
            webhooks.count(),
            webhooks.names().join(", ")
        );

        let http_client = startup::setup_reqwest_client()?;

        Ok(Self {
            config,
            webhooks,
            http_client,
        })
    }
}
