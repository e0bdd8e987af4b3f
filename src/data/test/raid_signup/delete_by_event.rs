use super::*;

#[tokio::test]
async fn deletes_only_that_events_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    let other = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, event.id, "1", "monk").await?;
    factory::create_signup(db, event.id, "2", "tentative").await?;
    factory::create_signup(db, other.id, "1", "monk").await?;

    let repo = RaidSignupRepository::new(db);

    assert_eq!(repo.delete_by_event(event.id).await?, 2);
    assert!(repo.get_sheet(event.id).await?.member_ids().is_empty());
    assert!(repo.get_sheet(other.id).await?.contains(Class::Monk.into(), 1));

    Ok(())
}
