use sea_orm::DatabaseConnection;

use crate::{
    data::badge::BadgeRepository,
    error::AppError,
    model::badge::{BadgeGrant, CreateBadgeParam},
};

pub struct BadgeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BadgeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants `flag` to `user`.
    ///
    /// Inserts a new record holding only `flag` when the user has none, otherwise appends
    /// `flag` to the existing list and writes back the flags column. The flag is appended even
    /// when the user already holds it.
    ///
    /// # Returns
    /// - `Ok(BadgeGrant::Created)` - A new record was inserted
    /// - `Ok(BadgeGrant::Updated)` - The flag was appended to the existing record
    /// - `Err(AppError::DbErr)` - Lookup, insert or update failed
    pub async fn grant(&self, user: &str, flag: &str) -> Result<BadgeGrant, AppError> {
        let repo = BadgeRepository::new(self.db);

        let Some(mut badge) = repo.find_by_user(user).await? else {
            let badge = repo
                .create(CreateBadgeParam {
                    user: user.to_string(),
                    flags: vec![flag.to_string()],
                })
                .await?;

            return Ok(BadgeGrant::Created(badge));
        };

        badge.flags.push(flag.to_string());
        let badge = repo.update_flags(user, badge.flags).await?;

        Ok(BadgeGrant::Updated(badge))
    }
}
