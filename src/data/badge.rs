//! Badge data repository for database operations.
//!
//! This module provides the `BadgeRepository` for reading and writing badge records. Each
//! record is keyed by user identifier, so at most one record exists per user.

use entity::badge::Flags;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::badge::{Badge, CreateBadgeParam};

/// Repository providing database operations for badge records.
pub struct BadgeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BadgeRepository<'a> {
    /// Creates a new BadgeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the badge record of a user.
    ///
    /// # Arguments
    /// - `user` - User identifier the record is keyed by
    ///
    /// # Returns
    /// - `Ok(Some(Badge))` - Record found
    /// - `Ok(None)` - No record exists for that user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user(&self, user: &str) -> Result<Option<Badge>, DbErr> {
        let entity = entity::prelude::Badge::find_by_id(user.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Badge::from_entity))
    }

    /// Inserts a new badge record.
    ///
    /// Fails with a unique constraint violation if the user already has a record.
    ///
    /// # Returns
    /// - `Ok(Badge)` - The inserted record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBadgeParam) -> Result<Badge, DbErr> {
        let entity = entity::badge::ActiveModel {
            user: ActiveValue::Set(param.user),
            flags: ActiveValue::Set(Flags(param.flags)),
        }
        .insert(self.db)
        .await?;

        Ok(Badge::from_entity(entity))
    }

    /// Replaces the flag list of an existing record.
    ///
    /// Only the flags column is written; the user key is left untouched.
    ///
    /// # Returns
    /// - `Ok(Badge)` - The record after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No record exists for that user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_flags(&self, user: &str, flags: Vec<String>) -> Result<Badge, DbErr> {
        let entity = entity::badge::ActiveModel {
            user: ActiveValue::Unchanged(user.to_string()),
            flags: ActiveValue::Set(Flags(flags)),
        }
        .update(self.db)
        .await?;

        Ok(Badge::from_entity(entity))
    }
}
