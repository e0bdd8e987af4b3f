use crate::{
    data::raid_participation::RaidParticipationRepository,
    error::AppError,
    model::{
        category::{Class, OffspecRole, Role, Spec},
        participation::Participation,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_event;
mod get_participation;
mod save_participation;
