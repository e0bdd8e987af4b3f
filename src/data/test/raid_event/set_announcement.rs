use super::*;

#[tokio::test]
async fn records_announcement_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_raid_event(db, "123").await?;

    let repo = RaidEventRepository::new(db);
    let event = repo
        .set_announcement(AnnouncementParams {
            event_id: created.id,
            channel_id: 456,
            message_id: 789,
            thread_id: Some(790),
        })
        .await?;

    assert_eq!(event.channel_id, 456);
    assert_eq!(event.message_id, Some(789));
    assert_eq!(event.thread_id, Some(790));

    Ok(())
}

#[tokio::test]
async fn records_and_clears_scheduled_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_raid_event(db, "123").await?;

    let repo = RaidEventRepository::new(db);
    let linked = repo.set_scheduled_event(created.id, Some(4242)).await?;
    assert_eq!(linked.scheduled_event_id, Some(4242));

    let cleared = repo.set_scheduled_event(created.id, None).await?;
    assert!(cleared.scheduled_event_id.is_none());

    Ok(())
}
