//! Domain models and operation-specific parameter types.

pub mod badge;
pub mod release;
pub mod webhook;
