use super::*;

#[tokio::test]
async fn appends_to_end_of_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::create_signup(db, event.id, "5", "priest").await?;

    let repo = RaidSignupRepository::new(db);
    repo.add(event.id, 7, Class::Priest.into()).await?;

    let sheet = repo.get_sheet(event.id).await?;
    assert_eq!(sheet.members(Class::Priest.into()), &[5, 7]);

    Ok(())
}
