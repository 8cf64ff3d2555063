use super::*;

/// Tests recording a warning.
///
/// Verifies no mute row is created for non-mute infractions.
///
/// Expected: Ok with infraction and no mute
#[tokio::test]
async fn records_warning_without_mute() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InfractionRepository::new(db);
    let (infraction, mute) = repo
        .create(param(InfractionKind::Warn, None), Utc::now())
        .await?;

    assert_eq!(infraction.kind, InfractionKind::Warn);
    assert_eq!(infraction.user_id, 10);
    assert_eq!(infraction.staff_username, "moderator");
    assert!(mute.is_none());
    assert_eq!(entity::prelude::Mute::find().count(db).await?, 0);

    Ok(())
}

/// Tests recording a mute.
///
/// Verifies the mute row shares the infraction's UUID and ends after the duration.
///
/// Expected: Ok with infraction and mute
#[tokio::test]
async fn records_mute_with_end_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = InfractionRepository::new(db);
    let (infraction, mute) = repo
        .create(
            param(InfractionKind::Mute, Some(Duration::minutes(90))),
            now,
        )
        .await?;

    let mute = mute.unwrap();
    assert_eq!(mute.infraction_id, infraction.id);
    assert_eq!(mute.user_id, 10);
    assert_eq!(mute.end_at - mute.start_at, Duration::minutes(90));

    Ok(())
}

/// Tests that every infraction gets its own UUID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_fresh_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InfractionRepository::new(db);
    let (first, _) = repo.create(param(InfractionKind::Kick, None), Utc::now()).await?;
    let (second, _) = repo.create(param(InfractionKind::Ban, None), Utc::now()).await?;

    assert_ne!(first.id, second.id);
    assert_ne!(first.id, Uuid::nil());

    Ok(())
}

/// Tests recording a mute whose end cannot be represented.
///
/// Verifies neither the infraction nor the mute row is inserted.
///
/// Expected: Err(BadRequest) and empty tables
#[tokio::test]
async fn rejects_out_of_range_mute_before_insert() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InfractionRepository::new(db);
    let result = repo
        .create(
            param(InfractionKind::Mute, Some(Duration::days(100_000_000))),
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Infraction::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Mute::find().count(db).await?, 0);

    Ok(())
}
