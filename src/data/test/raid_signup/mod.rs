use crate::{
    data::raid_signup::RaidSignupRepository,
    error::AppError,
    model::category::{Category, Class, OffspecRole, Status},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete_by_event;
mod get_sheet;
mod remove;
mod remove_members;
