use super::*;

#[tokio::test]
async fn sets_started_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_raid_event(db, "123").await?;

    let repo = RaidEventRepository::new(db);
    repo.mark_started(created.id).await?;

    let event = repo.get_event(created.id).await?.unwrap();
    assert!(event.event_started);
    assert!(repo.get_unstarted().await?.is_empty());

    Ok(())
}
