//! Discord gateway sessions.
//!
//! The bot connects a fixed number of shards, each an independent gateway session built and
//! driven by Serenity. `shard` owns the slot collection and the launch tasks, `start` wires
//! it to Serenity and to the process shutdown signal, and `handler` receives gateway events.
//!
//! # Gateway Intents
//!
//! Only non-privileged intents are requested, so no additional setup is required in the
//! Discord Developer Portal.

#[cfg(test)]
pub(crate) mod fake;
pub mod handler;
pub mod shard;
pub mod start;
