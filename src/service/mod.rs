//! Business logic orchestrating repositories and external APIs.

pub mod badge;
pub mod update;
