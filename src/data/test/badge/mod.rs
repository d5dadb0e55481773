use crate::{data::badge::BadgeRepository, model::badge::CreateBadgeParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::badge::BadgeFactory};

mod create;
mod find_by_user;
mod update_flags;
