use super::*;

/// Tests creating a new tag.
///
/// Verifies that the repository stores the name, content and owner and converts
/// the stored owner ID back to a u64.
///
/// Expected: Ok with tag created
#[tokio::test]
async fn creates_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParam {
            name: "rules".to_string(),
            content: "Be nice.".to_string(),
            owner_id: 123456789,
        })
        .await?;

    assert_eq!(tag.name, "rules");
    assert_eq!(tag.content, "Be nice.");
    assert_eq!(tag.owner_id, 123456789);

    let stored = entity::prelude::Tag::find_by_id(tag.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a tag whose name is already taken.
///
/// Expected: Err from the unique constraint on the name
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db).name("rules").build().await?;

    let repo = TagRepository::new(db);
    let result = repo
        .create(CreateTagParam {
            name: "rules".to_string(),
            content: "Other content".to_string(),
            owner_id: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
