use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Builds the Discord client without connecting.
///
/// Returns the client's HTTP handle alongside it so the scheduler can act on Discord
/// before [`start_bot`] takes ownership of the client.
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to be started and its shared HTTP client
/// - `Err(AppError)` - Client construction failed, e.g. a malformed token
pub async fn init_bot(config: &Config, state: BotState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and runs the bot until it shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
