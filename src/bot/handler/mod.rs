use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

pub mod ready;

/// Discord bot event handler, one instance per shard client.
pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    /// Called when a shard finishes its gateway handshake
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }
}
