use super::*;

/// Tests that lists come back in insertion order per category.
#[tokio::test]
async fn returns_lists_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, event.id, "3", "warrior").await?;
    factory::create_signup(db, event.id, "1", "warrior").await?;
    factory::create_signup(db, event.id, "2", "bench").await?;
    factory::create_signup(db, event.id, "1", "offspec_healer").await?;

    let repo = RaidSignupRepository::new(db);
    let sheet = repo.get_sheet(event.id).await?;

    assert_eq!(sheet.members(Class::Warrior.into()), &[3, 1]);
    assert_eq!(sheet.members(Status::Bench.into()), &[2]);
    assert_eq!(sheet.members(OffspecRole::Healer.into()), &[1]);

    Ok(())
}

#[tokio::test]
async fn ignores_other_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    let other = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, other.id, "1", "mage").await?;

    let repo = RaidSignupRepository::new(db);
    let sheet = repo.get_sheet(event.id).await?;

    assert!(sheet.member_ids().is_empty());

    Ok(())
}

/// Tests that an unknown stored category is reported rather than dropped.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, event.id, "1", "bard").await?;

    let repo = RaidSignupRepository::new(db);
    let result = repo.get_sheet(event.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
