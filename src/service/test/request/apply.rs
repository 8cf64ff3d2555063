use super::*;

/// Tests the full Pending, Active, Finished path.
///
/// Expected: Ok with each transition reporting its previous state
#[tokio::test]
async fn accepts_then_finishes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RequestService::new(db);
    let gate = RequestGate::new();
    service
        .submit(CreateRequestParam {
            initiator_id: 1,
            message_id: 500,
            description: "Review my crate".to_string(),
        })
        .await?;

    let accepted = service.apply(&gate, 500, RequestAction::Accept).await?.unwrap();
    assert_eq!(accepted.from, RequestState::Pending);
    assert_eq!(accepted.request.state, RequestState::Active);

    let finished = service.apply(&gate, 500, RequestAction::Finish).await?.unwrap();
    assert_eq!(finished.from, RequestState::Active);
    assert_eq!(finished.request.state, RequestState::Finished);

    Ok(())
}

/// Tests buttons that do not apply to the request's state.
///
/// Expected: Ok(None) for finish on Pending, accept on Denied and an unknown message
#[tokio::test]
async fn ignores_inapplicable_actions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::request::RequestFactory::new(db)
        .message_id("600")
        .build()
        .await?;
    factory::request::RequestFactory::new(db)
        .message_id("601")
        .state(StoredState::Denied)
        .build()
        .await?;

    let service = RequestService::new(db);
    let gate = RequestGate::new();
    assert!(service.apply(&gate, 600, RequestAction::Finish).await?.is_none());
    assert!(service.apply(&gate, 601, RequestAction::Accept).await?.is_none());
    assert!(service.apply(&gate, 999, RequestAction::Deny).await?.is_none());

    Ok(())
}

/// Tests accepting a request while another one is Active.
///
/// Expected: Err(Rejected) and the pending request unchanged
#[tokio::test]
async fn allows_single_active_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::request::RequestFactory::new(db)
        .message_id("700")
        .state(StoredState::Active)
        .build()
        .await?;
    factory::request::RequestFactory::new(db)
        .message_id("701")
        .build()
        .await?;

    let service = RequestService::new(db);
    let gate = RequestGate::new();
    let result = service.apply(&gate, 701, RequestAction::Accept).await;

    assert!(matches!(
        result,
        Err(AppError::Rejected { ref title, .. }) if title == "Another request is already active"
    ));

    let denied = service.apply(&gate, 701, RequestAction::Deny).await?.unwrap();
    assert_eq!(denied.request.state, RequestState::Denied);

    Ok(())
}

/// Tests two staff members accepting different requests at the same moment.
///
/// Verifies that transitions are serialized, so only one request becomes Active.
///
/// Expected: one accept succeeds, the other is rejected
#[tokio::test]
async fn concurrent_accepts_activate_one_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::request::RequestFactory::new(db)
        .message_id("800")
        .build()
        .await?;
    factory::request::RequestFactory::new(db)
        .message_id("801")
        .build()
        .await?;

    let service = RequestService::new(db);
    let gate = RequestGate::new();
    let (first, second) = tokio::join!(
        service.apply(&gate, 800, RequestAction::Accept),
        service.apply(&gate, 801, RequestAction::Accept),
    );

    let activated = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Ok(Some(t)) if t.request.state == RequestState::Active))
        .count();
    let rejected = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Rejected { .. })))
        .count();
    assert_eq!(activated, 1);
    assert_eq!(rejected, 1);

    Ok(())
}
