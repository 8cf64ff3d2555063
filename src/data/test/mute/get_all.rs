use super::*;

/// Tests loading mutes for the mute cache.
///
/// Expected: Ok with every mute, soonest expiry first
#[tokio::test]
async fn returns_mutes_by_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::infraction::create_mute_ending_at(db, "10", now + Duration::hours(5)).await?;
    factory::infraction::create_mute_ending_at(db, "11", now + Duration::hours(1)).await?;

    let mutes = MuteRepository::new(db).get_all().await?;

    let users: Vec<u64> = mutes.iter().map(|m| m.user_id).collect();
    assert_eq!(users, vec![11, 10]);

    Ok(())
}
