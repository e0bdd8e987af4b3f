use super::*;

/// Tests that only the guild's own events are returned, oldest first.
#[tokio::test]
async fn returns_only_guild_events_in_creation_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_raid_event(db, "123").await?;
    let _other = factory::create_raid_event(db, "999").await?;
    let second = factory::create_raid_event(db, "123").await?;

    let repo = RaidEventRepository::new(db);
    let events = repo.get_by_guild(123).await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_guild_without_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaidEventRepository::new(db);

    assert!(repo.get_by_guild(123).await?.is_empty());

    Ok(())
}
