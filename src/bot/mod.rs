//! Discord bot surface for raid sign-ups.
//!
//! The bot registers the `/raid` command, posts announcements carrying the sign-up
//! controls and routes every click or selection on those controls into the sign-up
//! service. Its HTTP client is shared with the lifecycle scheduler so both act on
//! Discord through one connection.
//!
//! # Gateway Intents
//!
//! - `GUILDS`: guild and channel availability
//! - `GUILD_MEMBERS`: privileged intent required to page through the guild's member list
//!   when resolving display names and pruning departed members. Enable it for the bot in
//!   the Discord developer portal.

pub mod command;
pub mod component;
pub mod embed;
pub mod handler;
pub mod start;
