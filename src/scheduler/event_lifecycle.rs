use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{host::SerenityHost, lifecycle::LifecycleService, signup::EventLocks},
};

/// Starts the raid event lifecycle scheduler
///
/// On every tick the sweep closes sign-ups for raids whose start time has passed: the
/// discussion thread is locked, the sign-up controls are removed and the event is marked
/// started.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for thread and message edits
/// - `locks`: Per-event locks shared with the interaction handlers
/// - `schedule`: Cron expression with a seconds field, e.g. `0 * * * * *`
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    locks: EventLocks,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_host = SerenityHost::new(discord_http);

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = job_db.clone();
        let host = job_host.clone();
        let locks = locks.clone();

        Box::pin(async move {
            let service = LifecycleService::new(&db, &host, &locks);
            match service.sweep(Utc::now()).await {
                Ok(0) => {}
                Ok(count) => tracing::info!("Lifecycle sweep started {} raid event(s)", count),
                Err(e) => tracing::error!("Error processing raid event lifecycle: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Raid event lifecycle scheduler started ({})", schedule);

    Ok(scheduler)
}
