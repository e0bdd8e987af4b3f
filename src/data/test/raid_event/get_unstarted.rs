use super::*;

/// Tests that started events are excluded across all guilds.
#[tokio::test]
async fn excludes_started_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending_a = factory::create_raid_event(db, "123").await?;
    let _started = factory::raid_event::RaidEventFactory::new(db, "123")
        .event_started(true)
        .build()
        .await?;
    let pending_b = factory::create_raid_event(db, "456").await?;

    let repo = RaidEventRepository::new(db);
    let events = repo.get_unstarted().await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![pending_a.id, pending_b.id]);

    Ok(())
}
