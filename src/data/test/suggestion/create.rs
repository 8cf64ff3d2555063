use super::*;

/// Expected: Ok with the suggestion in the New state
#[tokio::test]
async fn creates_new_suggestion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Suggestion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = SuggestionRepository::new(db)
        .create(CreateSuggestionParam {
            initiator_id: 1,
            message_id: 2,
            content: "Add a Rust channel".to_string(),
        })
        .await?;

    assert_eq!(suggestion.state, SuggestionState::New);
    assert_eq!(suggestion.content, "Add a Rust channel");
    assert!(suggestion.id > 0);

    Ok(())
}
