mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::event_lifecycle,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting raidtools");

    let state = BotState::new(db.clone(), &config);
    let locks = state.locks.clone();
    let (bot_client, discord_http) = init_bot(&config, state).await?;

    let _scheduler =
        event_lifecycle::start_scheduler(db, discord_http, locks, &config.sweep_schedule)
            .await?;

    start_bot(bot_client).await
}
