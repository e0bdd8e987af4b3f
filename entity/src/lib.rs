//! SeaORM entities for the raid sign-up tables.

pub mod prelude;

pub mod raid_event;
pub mod raid_participation;
pub mod raid_signup;
