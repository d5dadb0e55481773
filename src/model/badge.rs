//! Badge domain models and parameters.
//!
//! A badge record attaches an ordered list of flags to a single user identifier. Flags are
//! appended as grants happen and are never de-duplicated, so a repeated grant shows up twice.

/// Flag granted by the developer badge tool.
pub const DEVELOPER_FLAG: &str = "DEVELOPER";

/// Flags stored for a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// User identifier the flags belong to. Unique across the store.
    pub user: String,
    /// Flags in the order they were granted.
    pub flags: Vec<String>,
}

impl Badge {
    /// Converts an entity model to a badge domain model at the repository boundary.
    pub fn from_entity(entity: entity::badge::Model) -> Self {
        Self {
            user: entity.user,
            flags: entity.flags.0,
        }
    }
}

/// Parameters for inserting a new badge record.
#[derive(Debug, Clone)]
pub struct CreateBadgeParam {
    pub user: String,
    pub flags: Vec<String>,
}

/// Outcome of granting a flag to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeGrant {
    /// No record existed; a new one was inserted.
    Created(Badge),
    /// The flag was appended to an existing record.
    Updated(Badge),
}

impl BadgeGrant {
    /// The badge as stored after the grant.
    pub fn badge(&self) -> &Badge {
        match self {
            Self::Created(badge) | Self::Updated(badge) => badge,
        }
    }
}
