//! Webhook definitions loaded from the JSON webhook configuration file.

use std::collections::HashMap;

use serde::Deserialize;

/// Discord webhook identified by its id/token pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Webhook {
    pub id: String,
    pub token: String,
}

/// Read-only mapping from logical webhook name to its definition.
///
/// Deserializes directly from the configuration file's top-level JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct WebhookRegistry(HashMap<String, Webhook>);

impl WebhookRegistry {
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Logical webhook names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
