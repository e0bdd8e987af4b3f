//! Chat platform operations used by the services.
//!
//! Services talk to Discord only through [`GuildHost`] so that the sign-up, summary and
//! lifecycle logic can run against an in-memory host in tests.

use chrono::{DateTime, Utc};
use serenity::{
    all::{
        ChannelId, CreateScheduledEvent, EditMessage, EditThread, GuildId, Member, MessageId,
        ScheduledEventId, ScheduledEventType,
    },
    async_trait,
    http::Http,
};
use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use crate::{error::AppError, util::time::discord_timestamp};

#[cfg(test)]
pub mod mock;

/// Discord's maximum page size for listing guild members.
static MEMBERS_PER_REQUEST: u64 = 1000;

/// Location shown on bridged scheduled events.
const SCHEDULED_EVENT_LOCATION: &str = "In game";

/// Native guild scheduled event to create for a raid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEventDraft {
    pub name: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[async_trait]
pub trait GuildHost: Send + Sync {
    /// Display names of the given members that are still in the guild.
    ///
    /// Members that have left are absent from the returned map. Any failure is an error
    /// so callers never mistake an outage for departed members.
    async fn resolve_members(
        &self,
        guild_id: u64,
        user_ids: &BTreeSet<u64>,
    ) -> Result<HashMap<u64, String>, AppError>;

    async fn lock_thread(&self, thread_id: u64) -> Result<(), AppError>;

    /// Removes buttons and select menus from a message.
    async fn strip_components(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;

    /// Creates a native scheduled event and returns its id.
    async fn create_scheduled_event(
        &self,
        guild_id: u64,
        draft: &ScheduledEventDraft,
    ) -> Result<u64, AppError>;

    async fn delete_scheduled_event(
        &self,
        guild_id: u64,
        scheduled_event_id: u64,
    ) -> Result<(), AppError>;
}

/// [`GuildHost`] backed by the serenity HTTP client.
#[derive(Clone)]
pub struct SerenityHost {
    http: Arc<Http>,
}

impl SerenityHost {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GuildHost for SerenityHost {
    /// Pages through the guild member list in id order.
    ///
    /// Paging stops as soon as every requested member was seen or the listing has moved
    /// past the highest requested id. This requires the GUILD_MEMBERS privileged intent.
    async fn resolve_members(
        &self,
        guild_id: u64,
        user_ids: &BTreeSet<u64>,
    ) -> Result<HashMap<u64, String>, AppError> {
        let mut found = Vec::new();
        let mut after: Option<u64> = None;

        while !user_ids.is_empty() {
            let page = self
                .http
                .get_guild_members(guild_id.into(), Some(MEMBERS_PER_REQUEST), after)
                .await?;

            let fetched_count = page.len();
            after = page.last().map(|member| member.user.id.get());
            found.extend(
                page.into_iter()
                    .filter(|member| user_ids.contains(&member.user.id.get())),
            );

            if paging_done(fetched_count, found.len(), user_ids, after) {
                break;
            }
        }

        tracing::debug!(
            "Resolved {} of {} signed-up members in guild {}",
            found.len(),
            user_ids.len(),
            guild_id
        );

        Ok(member_names(found))
    }

    async fn lock_thread(&self, thread_id: u64) -> Result<(), AppError> {
        ChannelId::new(thread_id)
            .edit_thread(&self.http, EditThread::new().locked(true))
            .await?;
        Ok(())
    }

    async fn strip_components(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new().components(vec![]),
            )
            .await?;
        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .delete_message(&self.http, MessageId::new(message_id))
            .await?;
        Ok(())
    }

    async fn create_scheduled_event(
        &self,
        guild_id: u64,
        draft: &ScheduledEventDraft,
    ) -> Result<u64, AppError> {
        let mut builder = CreateScheduledEvent::new(
            ScheduledEventType::External,
            &draft.name,
            discord_timestamp(draft.start)?,
        )
        .end_time(discord_timestamp(draft.end)?)
        .location(SCHEDULED_EVENT_LOCATION);

        if !draft.description.is_empty() {
            builder = builder.description(&draft.description);
        }

        let event = GuildId::new(guild_id)
            .create_scheduled_event(&self.http, builder)
            .await?;

        Ok(event.id.get())
    }

    async fn delete_scheduled_event(
        &self,
        guild_id: u64,
        scheduled_event_id: u64,
    ) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .delete_scheduled_event(&self.http, ScheduledEventId::new(scheduled_event_id))
            .await?;
        Ok(())
    }
}

/// Maps fetched guild members to their display names.
pub fn member_names(members: impl IntoIterator<Item = Member>) -> HashMap<u64, String> {
    members
        .into_iter()
        .map(|member| (member.user.id.get(), member.display_name().to_string()))
        .collect()
}

/// Whether member paging can stop after a page of `fetched_count` members.
///
/// Discord lists members in ascending id order, so once the last id seen reaches the
/// highest wanted id no later page can contain a wanted member.
fn paging_done(
    fetched_count: usize,
    found_count: usize,
    wanted: &BTreeSet<u64>,
    last_seen: Option<u64>,
) -> bool {
    fetched_count < MEMBERS_PER_REQUEST as usize
        || found_count == wanted.len()
        || matches!((last_seen, wanted.last()), (Some(seen), Some(max)) if seen >= *max)
}
