use super::*;

#[tokio::test]
async fn deletes_existing_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_raid_event(db, "123").await?;

    let repo = RaidEventRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(repo.get_event(created.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn returns_false_for_nonexistent_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaidEventRepository::new(db);

    assert!(!repo.delete(999999).await?);

    Ok(())
}
