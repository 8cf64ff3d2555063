use super::*;

/// Expected: Ok with the decision stored
#[tokio::test]
async fn stores_decision() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Suggestion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_suggestion(db).await?;

    let repo = SuggestionRepository::new(db);
    let updated = repo
        .update_state(created.id, SuggestionState::Rejected)
        .await?;

    assert_eq!(updated.state, SuggestionState::Rejected);
    assert!(repo.get_by_state(SuggestionState::New).await?.is_empty());

    Ok(())
}
