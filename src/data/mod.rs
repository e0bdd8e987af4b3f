//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and convert rows into domain models.
//! They are generic over [`sea_orm::ConnectionTrait`] so the same repository works on a
//! pooled connection or inside a transaction; the signup service relies on this to read
//! and write an event's lists atomically.

pub mod raid_event;
pub mod raid_participation;
pub mod raid_signup;

#[cfg(test)]
mod test;
