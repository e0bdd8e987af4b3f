//! Sign-up row factory. Each row places one member in one category list.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Appends a member to a category list of an event.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event the list belongs to
/// - `user_id` - Member id as stored
/// - `category` - Category storage key, e.g. `"warrior"`, `"bench"` or `"offspec_tank"`
///
/// # Returns
/// - `Ok(entity::raid_signup::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_signup(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: impl Into<String>,
    category: impl Into<String>,
) -> Result<entity::raid_signup::Model, DbErr> {
    entity::raid_signup::ActiveModel {
        id: ActiveValue::NotSet,
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id.into()),
        category: ActiveValue::Set(category.into()),
    }
    .insert(db)
    .await
}
