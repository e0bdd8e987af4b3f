//! In-memory [`GuildHost`] that records every call.

use serenity::async_trait;
use std::{
    collections::{BTreeSet, HashMap},
    sync::Mutex,
    time::Duration,
};

use super::{GuildHost, ScheduledEventDraft};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    LockThread(u64),
    StripComponents(u64, u64),
    DeleteMessage(u64, u64),
    CreateScheduledEvent(u64, ScheduledEventDraft),
    DeleteScheduledEvent(u64, u64),
}

/// Id handed out for every scheduled event the mock creates.
pub const SCHEDULED_EVENT_ID: u64 = 5_550_001;

#[derive(Default)]
pub struct MockHost {
    /// Members currently in the guild with their display names.
    pub members: HashMap<u64, String>,
    /// Fail member resolution as if Discord were unreachable.
    pub members_unavailable: bool,
    /// Delay member resolution as if Discord were slow.
    pub resolve_delay: Option<Duration>,
    /// Fail every thread, message and scheduled event call.
    pub fail_calls: bool,
    pub calls: Mutex<Vec<HostCall>>,
}

impl MockHost {
    pub fn with_members<'a>(members: impl IntoIterator<Item = (u64, &'a str)>) -> Self {
        Self {
            members: members
                .into_iter()
                .map(|(id, name)| (id, name.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: HostCall) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_calls {
            return Err(serenity::Error::Other("mock host failure").into());
        }
        Ok(())
    }
}

#[async_trait]
impl GuildHost for MockHost {
    async fn resolve_members(
        &self,
        _guild_id: u64,
        user_ids: &BTreeSet<u64>,
    ) -> Result<HashMap<u64, String>, AppError> {
        if let Some(delay) = self.resolve_delay {
            tokio::time::sleep(delay).await;
        }
        if self.members_unavailable {
            return Err(serenity::Error::Other("mock host unavailable").into());
        }

        Ok(user_ids
            .iter()
            .filter_map(|id| self.members.get(id).map(|name| (*id, name.clone())))
            .collect())
    }

    async fn lock_thread(&self, thread_id: u64) -> Result<(), AppError> {
        self.record(HostCall::LockThread(thread_id))
    }

    async fn strip_components(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        self.record(HostCall::StripComponents(channel_id, message_id))
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        self.record(HostCall::DeleteMessage(channel_id, message_id))
    }

    async fn create_scheduled_event(
        &self,
        guild_id: u64,
        draft: &ScheduledEventDraft,
    ) -> Result<u64, AppError> {
        self.record(HostCall::CreateScheduledEvent(guild_id, draft.clone()))?;
        Ok(SCHEDULED_EVENT_ID)
    }

    async fn delete_scheduled_event(
        &self,
        guild_id: u64,
        scheduled_event_id: u64,
    ) -> Result<(), AppError> {
        self.record(HostCall::DeleteScheduledEvent(guild_id, scheduled_event_id))
    }
}
