use super::*;

#[tokio::test]
async fn returns_converted_participation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _signup, _participation) = factory::helpers::create_event_with_signup(
        db, "123", "42", "paladin", "protection", "tank",
    )
    .await?;

    let repo = RaidParticipationRepository::new(db);
    let participation = repo.get_participation(event.id, 42).await?.unwrap();

    assert_eq!(participation.guild_id, 123);
    assert_eq!(participation.class, Some(Class::Paladin));
    assert_eq!(participation.spec, Some(Spec::ProtectionPaladin));
    assert_eq!(participation.role, Some(Role::Tank));
    assert_eq!(participation.offspec, None);

    Ok(())
}

/// Tests that a row without a stored role derives it from the spec key.
///
/// Expected: unrecognized spec keys fall back to dps
#[tokio::test]
async fn derives_missing_role_from_spec() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    factory::raid_participation::RaidParticipationFactory::new(db, event.id, "1")
        .class("druid")
        .spec("restoration")
        .build()
        .await?;
    factory::raid_participation::RaidParticipationFactory::new(db, event.id, "2")
        .class("mage")
        .spec("chronomancy")
        .build()
        .await?;

    let repo = RaidParticipationRepository::new(db);

    let healer = repo.get_participation(event.id, 1).await?.unwrap();
    assert_eq!(healer.role, Some(Role::Healer));

    let unknown = repo.get_participation(event.id, 2).await?.unwrap();
    assert_eq!(unknown.spec, None);
    assert_eq!(unknown.role, Some(Role::Dps));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;

    let repo = RaidParticipationRepository::new(db);

    assert!(repo.get_participation(event.id, 42).await?.is_none());

    Ok(())
}
