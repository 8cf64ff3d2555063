use super::*;

/// Tests recording a mute.
///
/// Verifies that the mute is stored with the given duration and cached.
///
/// Expected: Ok with infraction and mute, member muted in cache
#[tokio::test]
async fn records_mute_and_caches_it() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = MuteCache::new();
    let service = ModerationService::new(db, &cache);
    let now = Utc::now();

    let (infraction, mute) = service
        .record(param(10, InfractionKind::Mute, Some(Duration::hours(2))), now)
        .await?;

    let mute = mute.unwrap();
    assert_eq!(mute.infraction_id, infraction.id);
    assert_eq!(mute.end_at - mute.start_at, Duration::hours(2));
    assert!(cache.is_muted(10, Utc::now()).await);
    assert_eq!(service.history(10).await?.len(), 1);

    Ok(())
}

/// Tests recording a mute with a zero duration.
///
/// Expected: Err(BadRequest("Invalid duration")) and nothing stored
#[tokio::test]
async fn rejects_zero_duration_mute() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = MuteCache::new();
    let service = ModerationService::new(db, &cache);

    let result = service
        .record(param(10, InfractionKind::Mute, Some(Duration::zero())), Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Invalid duration"));
    assert!(service.history(10).await?.is_empty());

    Ok(())
}

/// Tests recording a mute whose end lies past the representable date range.
///
/// Verifies that the duration is rejected before anything is stored, so no
/// infraction is left behind without its mute.
///
/// Expected: Err(BadRequest("Invalid duration")), no infraction, no mute
#[tokio::test]
async fn rejects_mute_ending_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = MuteCache::new();
    let service = ModerationService::new(db, &cache);
    let duration = parse_duration("100000000d").unwrap();

    let result = service
        .record(param(10, InfractionKind::Mute, Some(duration)), Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Invalid duration"));
    assert!(service.history(10).await?.is_empty());
    assert!(MuteRepository::new(db).get_all().await?.is_empty());
    assert!(!cache.is_muted(10, Utc::now()).await);

    Ok(())
}

/// Tests deleting a mute infraction.
///
/// Verifies that the active mute is lifted from the cache with it.
///
/// Expected: Ok with the lifted mute, then NotFound on a second delete
#[tokio::test]
async fn delete_lifts_mute() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = MuteCache::new();
    let service = ModerationService::new(db, &cache);
    let (infraction, _) = service
        .record(param(10, InfractionKind::Mute, Some(Duration::minutes(5))), Utc::now())
        .await?;

    let (deleted, lifted) = service.delete(infraction.id).await?;
    assert_eq!(deleted.id, infraction.id);
    assert!(lifted.is_some());
    assert!(!cache.is_muted(10, Utc::now()).await);

    let again = service.delete(infraction.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
