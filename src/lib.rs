//! Discord bot bootstrap with a companion developer badge tool.
//!
//! The crate backs two binaries:
//!
//! - `shardbot` loads its configuration, fires a one-off release check and runs a fixed
//!   number of gateway shards until a shard fails or the process is asked to stop.
//! - `badge` grants the `DEVELOPER` flag to a user record in the badge database.
//!
//! # Layout
//!
//! - **Configuration** (`config`, `startup`) - Environment, webhook file and connections
//! - **State** (`state`) - Application context built once at startup
//! - **Bot** (`bot/`) - Shard manager, Serenity gateway and event handlers
//! - **Service Layer** (`service/`) - Badge grants and the release check
//! - **Data Layer** (`data/`) - Badge repository over SeaORM
//! - **Model Layer** (`model/`) - Domain models and parameter types
//! - **Error Layer** (`error/`) - Application error types

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
