use super::*;

/// Tests creating an event with all fields.
///
/// Expected: Ok with ids parsed back and no announcement recorded yet
#[tokio::test]
async fn creates_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaidEventRepository::new(db);
    let event = repo
        .create(CreateRaidEventParams {
            guild_id: 123,
            channel_id: 456,
            created_by: 789,
            name: "Mythic Night".to_string(),
            description: "Bring flasks".to_string(),
            start_time: "<t:1700000000:F>".to_string(),
            end_time: Some("<t:1700010800:F>".to_string()),
        })
        .await?;

    assert_eq!(event.guild_id, 123);
    assert_eq!(event.channel_id, 456);
    assert_eq!(event.created_by, 789);
    assert_eq!(event.name, "Mythic Night");
    assert_eq!(event.end_time.as_deref(), Some("<t:1700010800:F>"));
    assert!(event.message_id.is_none());
    assert!(event.thread_id.is_none());
    assert!(!event.event_started);

    Ok(())
}
