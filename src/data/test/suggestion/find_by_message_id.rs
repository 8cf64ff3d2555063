use super::*;

/// Expected: Ok(Some) for a known message, Ok(None) otherwise
#[tokio::test]
async fn finds_suggestion_by_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Suggestion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::suggestion::SuggestionFactory::new(db)
        .message_id("321")
        .build()
        .await?;

    let repo = SuggestionRepository::new(db);

    assert_eq!(repo.find_by_message_id(321).await?.map(|s| s.id), Some(created.id));
    assert!(repo.find_by_message_id(322).await?.is_none());

    Ok(())
}
