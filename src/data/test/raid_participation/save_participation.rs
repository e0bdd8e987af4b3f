use super::*;

#[tokio::test]
async fn inserts_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;

    let mut participation = Participation::new(event.id, 123, 7);
    participation.class = Some(Class::Shaman);
    participation.spec = Some(Spec::RestorationShaman);
    participation.role = Some(Role::Healer);

    let repo = RaidParticipationRepository::new(db);
    repo.save_participation(&participation).await?;

    let stored = repo.get_participation(event.id, 7).await?.unwrap();
    assert_eq!(stored, participation);

    Ok(())
}

/// Tests that saving twice replaces the row instead of adding a second one.
#[tokio::test]
async fn replaces_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _signup, _participation) = factory::helpers::create_event_with_signup(
        db, "123", "7", "warrior", "arms", "dps",
    )
    .await?;

    let mut participation = Participation::new(event.id, 123, 7);
    participation.offspec = Some(OffspecRole::Tank);

    let repo = RaidParticipationRepository::new(db);
    repo.save_participation(&participation).await?;

    let records = repo.get_by_event(event.id).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[&7], participation);

    Ok(())
}
