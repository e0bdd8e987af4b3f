use crate::{
    data::raid_event::RaidEventRepository,
    error::AppError,
    model::raid_event::{AnnouncementParams, CreateRaidEventParams, UpdateRaidEventParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_guild;
mod get_event;
mod get_unstarted;
mod mark_started;
mod save_event;
mod set_announcement;
