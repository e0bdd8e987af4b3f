use super::*;

#[tokio::test]
async fn removes_member_from_one_category_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, event.id, "1", "druid").await?;
    factory::create_signup(db, event.id, "1", "offspec_tank").await?;

    let repo = RaidSignupRepository::new(db);
    let removed = repo.remove(event.id, 1, Class::Druid.into()).await?;

    assert!(removed);
    let sheet = repo.get_sheet(event.id).await?;
    assert!(sheet.members(Class::Druid.into()).is_empty());
    assert!(sheet.contains(Category::Offspec(OffspecRole::Tank), 1));

    Ok(())
}

#[tokio::test]
async fn returns_false_when_member_absent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;

    let repo = RaidSignupRepository::new(db);

    assert!(!repo.remove(event.id, 1, Status::Late.into()).await?);

    Ok(())
}
