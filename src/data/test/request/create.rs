use super::*;

/// Tests storing a freshly posted request.
///
/// Expected: Ok with the request in the Pending state
#[tokio::test]
async fn creates_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RequestRepository::new(db);
    let request = repo
        .create(CreateRequestParam {
            initiator_id: 10,
            message_id: 20,
            description: "Write a parser tutorial".to_string(),
        })
        .await?;

    assert_eq!(request.state, RequestState::Pending);
    assert_eq!(request.initiator_id, 10);
    assert_eq!(request.message_id, 20);

    Ok(())
}

/// Tests storing two requests for the same message.
///
/// Expected: Err from the unique constraint on the message ID
#[tokio::test]
async fn fails_for_duplicate_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::request::RequestFactory::new(db)
        .message_id("20")
        .build()
        .await?;

    let result = RequestRepository::new(db)
        .create(CreateRequestParam {
            initiator_id: 10,
            message_id: 20,
            description: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
