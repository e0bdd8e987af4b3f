use super::*;

#[tokio::test]
async fn removes_members_from_every_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, event.id, "1", "rogue").await?;
    factory::create_signup(db, event.id, "1", "offspec_dps").await?;
    factory::create_signup(db, event.id, "2", "rogue").await?;
    factory::create_signup(db, event.id, "3", "absent").await?;

    let repo = RaidSignupRepository::new(db);
    let deleted = repo.remove_members(event.id, &[1, 3]).await?;

    assert_eq!(deleted, 3);
    let sheet = repo.get_sheet(event.id).await?;
    assert_eq!(sheet.member_ids().into_iter().collect::<Vec<_>>(), vec![2]);

    Ok(())
}

#[tokio::test]
async fn does_nothing_for_empty_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, event.id, "1", "rogue").await?;

    let repo = RaidSignupRepository::new(db);

    assert_eq!(repo.remove_members(event.id, &[]).await?, 0);
    assert!(repo.get_sheet(event.id).await?.contains(Class::Rogue.into(), 1));

    Ok(())
}
