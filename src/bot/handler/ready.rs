//! Ready event handler.
//!
//! Fired once the gateway handshake completes. Registers the `/raid` command, in the
//! configured guild when one is set (changes apply immediately) or globally otherwise.

use serenity::all::{Command, Context, GuildId, Ready};

use crate::{bot::command::raid_command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Bot state holding the command registration target
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let result = match state.command_guild_id {
        Some(guild_id) => GuildId::new(guild_id)
            .create_command(&ctx.http, raid_command())
            .await
            .map(|_| format!("guild {}", guild_id)),
        None => Command::create_global_command(&ctx.http, raid_command())
            .await
            .map(|_| "all guilds".to_string()),
    };

    match result {
        Ok(target) => tracing::info!("Registered /raid command for {}", target),
        Err(e) => tracing::error!("Failed to register /raid command: {:?}", e),
    }
}
