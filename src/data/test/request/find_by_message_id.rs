use super::*;

/// Expected: Ok(Some) for the request's message, Ok(None) otherwise
#[tokio::test]
async fn finds_request_by_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::request::RequestFactory::new(db)
        .message_id("900")
        .build()
        .await?;

    let repo = RequestRepository::new(db);

    assert_eq!(repo.find_by_message_id(900).await?.map(|r| r.id), Some(created.id));
    assert!(repo.find_by_message_id(901).await?.is_none());

    Ok(())
}
