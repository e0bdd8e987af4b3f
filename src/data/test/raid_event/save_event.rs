use super::*;

/// Tests that only provided fields change.
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::raid_event::RaidEventFactory::new(db, "123")
        .name("Old Name")
        .start_time("2024-05-01 20:00")
        .end_time(Some("2024-05-01 23:00".to_string()))
        .build()
        .await?;

    let repo = RaidEventRepository::new(db);
    let updated = repo
        .save_event(UpdateRaidEventParams {
            id: created.id,
            name: Some("New Name".to_string()),
            end_time: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.start_time, "2024-05-01 20:00");
    assert_eq!(updated.description, created.description);
    assert!(updated.end_time.is_none());

    Ok(())
}

#[tokio::test]
async fn fails_for_nonexistent_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaidEventRepository::new(db);
    let result = repo
        .save_event(UpdateRaidEventParams {
            id: 999999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
