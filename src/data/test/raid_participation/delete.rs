use super::*;

#[tokio::test]
async fn deletes_selected_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::create_participation(db, event.id, "1").await?;
    factory::create_participation(db, event.id, "2").await?;
    factory::create_participation(db, event.id, "3").await?;

    let repo = RaidParticipationRepository::new(db);

    assert_eq!(repo.delete_members(event.id, &[1, 3]).await?, 2);
    let remaining: Vec<u64> = repo.get_by_event(event.id).await?.into_keys().collect();
    assert_eq!(remaining, vec![2]);

    Ok(())
}

#[tokio::test]
async fn deletes_all_records_of_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    let other = factory::create_raid_event(db, "123").await?;
    factory::create_participation(db, event.id, "1").await?;
    factory::create_participation(db, other.id, "1").await?;

    let repo = RaidParticipationRepository::new(db);

    assert_eq!(repo.delete_by_event(event.id).await?, 1);
    assert!(repo.get_by_event(event.id).await?.is_empty());
    assert_eq!(repo.get_by_event(other.id).await?.len(), 1);

    Ok(())
}
