//! Badge factory for seeding badge records in tests.

use crate::factory::helpers::next_id;
use entity::badge::Flags;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test badge records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::badge::BadgeFactory;
///
/// let badge = BadgeFactory::new(&db)
///     .user("123456789")
///     .flags(["DEVELOPER"])
///     .build()
///     .await?;
/// ```
pub struct BadgeFactory<'a> {
    db: &'a DatabaseConnection,
    user: String,
    flags: Vec<String>,
}

impl<'a> BadgeFactory<'a> {
    /// Creates a new BadgeFactory with default values.
    ///
    /// Defaults:
    /// - user: auto-incremented numeric ID
    /// - flags: `["DEVELOPER"]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user: next_id().to_string(),
            flags: vec!["DEVELOPER".to_string()],
        }
    }

    /// Sets the user identifier the badge belongs to.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Replaces the flag list stored on the badge.
    pub fn flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the badge entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::badge::Model)` - Created badge entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::badge::Model, DbErr> {
        entity::badge::ActiveModel {
            user: ActiveValue::Set(self.user),
            flags: ActiveValue::Set(Flags(self.flags)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a badge with default values.
///
/// Shorthand for `BadgeFactory::new(db).build().await`.
pub async fn create_badge(db: &DatabaseConnection) -> Result<entity::badge::Model, DbErr> {
    BadgeFactory::new(db).build().await
}
