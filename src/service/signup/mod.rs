pub mod mutator;

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    data::{
        raid_event::RaidEventRepository, raid_participation::RaidParticipationRepository,
        raid_signup::RaidSignupRepository,
    },
    error::AppError,
    model::participation::Participation,
    service::signup::mutator::{SignupOutcome, SignupRequest},
};

/// Per-event async locks serializing read-modify-write cycles on an event's lists.
///
/// Cloning shares the same lock table. Events are independent; only operations on the
/// same event wait for each other.
#[derive(Clone, Default)]
pub struct EventLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl EventLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to an event. Access ends when the guard is dropped.
    pub async fn acquire(&self, event_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(event_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Drops the lock of a deleted event.
    pub async fn forget(&self, event_id: i32) {
        self.locks.lock().await.remove(&event_id);
    }
}

pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a EventLocks,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a EventLocks) -> Self {
        Self { db, locks }
    }

    /// Applies a member's selection to an event
    ///
    /// Holds the event's lock while the sheet and participation record are loaded,
    /// changed and written back in one transaction. No-op outcomes roll back without
    /// writing.
    ///
    /// # Returns
    /// - `Ok(SignupOutcome)`: What happened to the member's selection
    /// - `Err(AppError::NotFound)`: Event doesn't exist
    /// - `Err(AppError::BadRequest)`: Event has already started
    pub async fn signup(
        &self,
        event_id: i32,
        user_id: u64,
        request: SignupRequest,
    ) -> Result<SignupOutcome, AppError> {
        let _guard = self.locks.acquire(event_id).await;
        let txn = self.db.begin().await?;

        let event = RaidEventRepository::new(&txn)
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Raid event not found".to_string()))?;

        if event.event_started {
            return Err(AppError::BadRequest(
                "Sign-ups for this raid are closed".to_string(),
            ));
        }

        let signup_repo = RaidSignupRepository::new(&txn);
        let participation_repo = RaidParticipationRepository::new(&txn);

        let mut sheet = signup_repo.get_sheet(event_id).await?;
        let mut participation = participation_repo
            .get_participation(event_id, user_id)
            .await?
            .unwrap_or_else(|| Participation::new(event_id, event.guild_id, user_id));

        let outcome = mutator::apply(&mut sheet, &mut participation, request);

        if let SignupOutcome::Updated(change) = outcome {
            if let Some(removed) = change.removed {
                signup_repo.remove(event_id, user_id, removed).await?;
            }
            if let Some(added) = change.added {
                signup_repo.add(event_id, user_id, added).await?;
            }
            participation_repo.save_participation(&participation).await?;

            txn.commit().await?;

            tracing::debug!(
                "Member {} updated sign-up for event {}: {:?}",
                user_id,
                event_id,
                change
            );
        }

        Ok(outcome)
    }
}
