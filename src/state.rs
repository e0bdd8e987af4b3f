//! Bot state shared across all event handlers.
//!
//! The state is built once during startup and owned by the serenity event handler. Each
//! interaction borrows it to construct the services it needs.

use sea_orm::DatabaseConnection;

use crate::{config::Config, service::signup::EventLocks};

#[derive(Clone)]
pub struct BotState {
    /// Database connection pool shared by all handlers and the scheduler.
    pub db: DatabaseConnection,

    /// Per-event locks serializing sign-up writes.
    pub locks: EventLocks,

    /// Guild to register slash commands in; `None` registers them globally.
    pub command_guild_id: Option<u64>,

    /// Whether `/raid create` opens a discussion thread on the announcement.
    pub create_threads: bool,
}

impl BotState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            locks: EventLocks::new(),
            command_guild_id: config.discord_guild_id,
            create_threads: config.create_threads,
        }
    }
}
