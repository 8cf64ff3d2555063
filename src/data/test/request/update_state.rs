use super::*;

/// Expected: Ok with the new state stored
#[tokio::test]
async fn updates_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_request(db).await?;

    let repo = RequestRepository::new(db);
    let request = repo
        .update_state(created.id, RequestState::Pending, RequestState::Active)
        .await?
        .unwrap();

    assert_eq!(request.state, RequestState::Active);
    assert_eq!(request.description, created.description);
    assert_eq!(
        repo.find_active().await?.map(|r| r.id),
        Some(created.id)
    );

    Ok(())
}

/// Tests a transition whose starting state no longer matches.
///
/// Expected: Ok(None) and the stored state unchanged
#[tokio::test]
async fn skips_stale_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_request(db).await?;

    let repo = RequestRepository::new(db);
    repo.update_state(created.id, RequestState::Pending, RequestState::Denied)
        .await?;
    let stale = repo
        .update_state(created.id, RequestState::Pending, RequestState::Active)
        .await?;

    assert!(stale.is_none());
    assert!(repo.find_active().await?.is_none());

    Ok(())
}

/// Expected: Ok(None) for an unknown request ID
#[tokio::test]
async fn skips_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RequestRepository::new(db)
        .update_state(404, RequestState::Pending, RequestState::Denied)
        .await?;

    assert!(result.is_none());

    Ok(())
}
