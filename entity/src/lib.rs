//! SeaORM entities for the shardbot document store.

pub mod badge;
pub mod prelude;
