use serenity::all::{
    ChannelId, Context, EditMessage, EventHandler, Interaction, MessageId, Ready,
};
use serenity::async_trait;

use crate::{
    bot::{command::COMMAND_NAME, embed::summary_embed},
    error::AppError,
    service::{host::SerenityHost, summary::SummaryService},
    state::BotState,
};

pub mod command;
pub mod component;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called for slash commands, button clicks and select menu choices
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) if command.data.name == COMMAND_NAME => {
                command::handle_raid_command(&self.state, ctx, command).await;
            }
            Interaction::Component(component) => {
                component::handle_component(&self.state, ctx, component).await;
            }
            _ => {}
        }
    }
}

/// Message shown to the member when handling their interaction failed.
///
/// Expected failures carry a message meant for the member; everything else is reported
/// generically with the error text.
pub fn user_message(err: &AppError) -> String {
    match err {
        AppError::NotFound(message) | AppError::BadRequest(message) => message.clone(),
        other => format!("Something went wrong: {}", other),
    }
}

/// Re-renders an event's summary into its announcement message.
///
/// Does nothing for events whose announcement was never posted.
pub async fn refresh_announcement(
    state: &BotState,
    ctx: &Context,
    event_id: i32,
) -> Result<(), AppError> {
    let host = SerenityHost::new(ctx.http.clone());
    let (event, summary) = SummaryService::new(&state.db, &host, &state.locks)
        .refresh(event_id, false)
        .await?;

    let Some(message_id) = event.message_id else {
        return Ok(());
    };

    let embed = summary_embed(&event, &summary)?;
    ChannelId::new(event.channel_id)
        .edit_message(&ctx.http, MessageId::new(message_id), EditMessage::new().embed(embed))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::internal::InternalError;

    #[test]
    fn expected_errors_are_shown_verbatim() {
        assert_eq!(
            user_message(&AppError::BadRequest("Sign-ups for this raid are closed".to_string())),
            "Sign-ups for this raid are closed"
        );
        assert_eq!(
            user_message(&AppError::NotFound("Raid event 4 not found".to_string())),
            "Raid event 4 not found"
        );
    }

    #[test]
    fn unexpected_errors_are_prefixed() {
        let err = AppError::InternalErr(InternalError::UnknownStoredKey {
            kind: "category",
            key: "paladin_tank".to_string(),
        });

        assert_eq!(
            user_message(&err),
            "Something went wrong: Unknown category key 'paladin_tank' stored in the database"
        );
    }
}
