use super::*;

/// Tests approving a new suggestion.
///
/// Verifies that the decided suggestion leaves the pending list.
///
/// Expected: Ok(Some) with state Approved
#[tokio::test]
async fn approves_new_suggestion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Suggestion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SuggestionService::new(db);
    service
        .submit(CreateSuggestionParam {
            initiator_id: 1,
            message_id: 800,
            content: "Add a showcase channel".to_string(),
        })
        .await?;
    assert_eq!(service.pending().await?.len(), 1);

    let decided = service.decide(800, SuggestionAction::Approve).await?.unwrap();

    assert_eq!(decided.state, SuggestionState::Approved);
    assert!(service.pending().await?.is_empty());

    Ok(())
}

/// Tests pressing a button on a suggestion that was already decided.
///
/// Expected: Ok(None) and the state unchanged
#[tokio::test]
async fn ignores_decided_suggestion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Suggestion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::suggestion::SuggestionFactory::new(db)
        .message_id("801")
        .state(SuggestionState::Rejected)
        .build()
        .await?;

    let service = SuggestionService::new(db);
    let result = service.decide(801, SuggestionAction::Approve).await?;

    assert!(result.is_none());

    Ok(())
}
