use super::*;

#[tokio::test]
async fn returns_existing_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::raid_event::RaidEventFactory::new(db, "123")
        .announcement("456", "789")
        .scheduled_event_id("555")
        .build()
        .await?;

    let repo = RaidEventRepository::new(db);
    let event = repo.get_event(created.id).await?.unwrap();

    assert_eq!(event.id, created.id);
    assert_eq!(event.message_id, Some(789));
    assert_eq!(event.scheduled_event_id, Some(555));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_nonexistent_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaidEventRepository::new(db);

    assert!(repo.get_event(999999).await?.is_none());

    Ok(())
}

/// Tests that a corrupt stored id surfaces as an internal error instead of a panic.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unparsable_guild_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_raid_event(db, "not-a-number").await?;

    let repo = RaidEventRepository::new(db);
    let result = repo.get_event(created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
