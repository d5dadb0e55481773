//! Release metadata returned by the GitHub releases API.

use std::fmt;

use serde::Deserialize;

/// Latest published release. Only the tag is read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub tag_name: String,
}

/// Version drift between the running build and the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAdvisory {
    pub current: String,
    pub latest: String,
}

impl fmt::Display for UpdateAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your bot is not up to date! Please update to the latest version: {} -> {}",
            self.current, self.latest
        )
    }
}
