//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event and signs a member up for one class with a matching participation row.
///
/// The member is placed in the `class` list and the participation row carries the class,
/// spec and role keys. Useful for tests that need an already-populated sheet.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the event belongs to
/// - `user_id` - Member to sign up
/// - `class` - Class storage key, e.g. `"warrior"`
/// - `spec` - Spec storage key, e.g. `"protection"`
/// - `role` - Role storage key, e.g. `"tank"`
///
/// # Returns
/// - `Ok((event, signup, participation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_signup(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    class: &str,
    spec: &str,
    role: &str,
) -> Result<
    (
        entity::raid_event::Model,
        entity::raid_signup::Model,
        entity::raid_participation::Model,
    ),
    DbErr,
> {
    let event = crate::factory::raid_event::create_raid_event(db, guild_id).await?;
    let signup = crate::factory::raid_signup::create_signup(db, event.id, user_id, class).await?;
    let participation =
        crate::factory::raid_participation::RaidParticipationFactory::new(db, event.id, user_id)
            .guild_id(guild_id)
            .class(class)
            .spec(spec)
            .role(role)
            .build()
            .await?;

    Ok((event, signup, participation))
}
