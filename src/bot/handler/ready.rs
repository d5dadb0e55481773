//! Ready event handler for shard startup.
//!
//! The `ready` event fires once a shard completes its gateway handshake (and again after a
//! full re-identify). It is the only event this bot reacts to.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::bot::shard::ShardSpec;

/// Handles the ready event when a shard connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for the shard that became ready
/// - `ready` - Ready event data containing bot user and shard information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    let shard = ready.shard.map(|info| ShardSpec {
        index: info.id.0,
        total: info.total,
    });

    tracing::info!("{}", ready_message(&ready.user.name, shard));
}

fn ready_message(user_name: &str, shard: Option<ShardSpec>) -> String {
    match shard {
        Some(shard) => format!("Shard #{} is ready", shard.number()),
        None => format!("{} is connected to Discord", user_name),
    }
}
