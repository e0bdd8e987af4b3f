use super::*;

#[tokio::test]
async fn keys_records_by_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_raid_event(db, "123").await?;
    let other = factory::create_raid_event(db, "123").await?;
    factory::raid_participation::RaidParticipationFactory::new(db, event.id, "1")
        .class("hunter")
        .spec("marksmanship")
        .role("dps")
        .offspec_role("offspec_ranged_dps")
        .build()
        .await?;
    factory::create_participation(db, event.id, "2").await?;
    factory::create_participation(db, other.id, "3").await?;

    let repo = RaidParticipationRepository::new(db);
    let records = repo.get_by_event(event.id).await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[&1].spec, Some(Spec::Marksmanship));
    assert_eq!(records[&1].offspec, Some(OffspecRole::RangedDps));
    assert_eq!(records[&2].class, None);

    Ok(())
}
