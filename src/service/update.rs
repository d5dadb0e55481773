//! Release check against the GitHub releases API.
//!
//! The check runs once at startup on its own task. It is advisory: failures are logged and
//! never reach the caller, and a newer release only produces a warning.

use dioxus_logger::tracing;

use crate::{
    error::AppError,
    model::release::{Release, UpdateAdvisory},
};

/// Version compiled into this build, compared verbatim against the release tag.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct UpdateService<'a> {
    http_client: &'a reqwest::Client,
    release_url: &'a str,
    current_version: &'a str,
}

impl<'a> UpdateService<'a> {
    pub fn new(http_client: &'a reqwest::Client, release_url: &'a str) -> Self {
        Self {
            http_client,
            release_url,
            current_version: CURRENT_VERSION,
        }
    }

    /// Overrides the version the release tag is compared against.
    pub fn with_current_version(mut self, current_version: &'a str) -> Self {
        self.current_version = current_version;
        self
    }

    /// Fetches the latest release metadata.
    ///
    /// # Returns
    /// - `Ok(Release)` - Decoded release with its tag
    /// - `Err(AppError::ReqwestErr)` - Network failure, non-success status or undecodable body
    pub async fn latest_release(&self) -> Result<Release, AppError> {
        let release = self
            .http_client
            .get(self.release_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Release>()
            .await?;

        Ok(release)
    }

    /// Compares the running version with the latest release tag.
    ///
    /// # Returns
    /// - `Ok(None)` - Tag equals the running version
    /// - `Ok(Some(UpdateAdvisory))` - Tag differs from the running version
    /// - `Err(AppError::ReqwestErr)` - The release could not be fetched
    pub async fn check(&self) -> Result<Option<UpdateAdvisory>, AppError> {
        let release = self.latest_release().await?;

        if release.tag_name == self.current_version {
            return Ok(None);
        }

        Ok(Some(UpdateAdvisory {
            current: self.current_version.to_string(),
            latest: release.tag_name,
        }))
    }
}

/// Spawns the release check without keeping a handle to it.
///
/// Nothing is reported back to the caller; the outcome only shows up in the logs.
pub fn spawn_update_check(http_client: reqwest::Client, release_url: String) {
    tokio::spawn(async move {
        match UpdateService::new(&http_client, &release_url).check().await {
            Ok(Some(advisory)) => tracing::warn!("{}", advisory),
            Ok(None) => tracing::debug!("Bot is up to date ({})", CURRENT_VERSION),
            Err(e) => tracing::warn!("Failed to check if bot is up to date: {}", e),
        }
    });
}
