//! Test factory for creating Serenity guild Member objects.

use serenity::all::Member;

/// Creates a test Serenity guild member.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `nick` - Optional guild nickname
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user_id: u64, username: &str, nick: Option<&str>) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
