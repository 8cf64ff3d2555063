use super::*;

/// Tests listing pending suggestions.
///
/// Expected: Ok with only New suggestions, oldest first
#[tokio::test]
async fn returns_only_matching_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Suggestion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_suggestion(db).await?;
    factory::suggestion::SuggestionFactory::new(db)
        .state(SuggestionState::Approved)
        .build()
        .await?;
    let second = factory::create_suggestion(db).await?;

    let pending = SuggestionRepository::new(db)
        .get_by_state(SuggestionState::New)
        .await?;

    let ids: Vec<i32> = pending.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
