use super::*;

/// Tests finding a tag by its stored name.
///
/// Expected: Ok(Some) with the matching tag
#[tokio::test]
async fn finds_existing_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tag::TagFactory::new(db)
        .name("faq")
        .content("Read the FAQ.")
        .build()
        .await?;

    let repo = TagRepository::new(db);
    let tag = repo.find_by_name("faq").await?;

    assert!(tag.is_some());
    let tag = tag.unwrap();
    assert_eq!(tag.id, created.id);
    assert_eq!(tag.content, "Read the FAQ.");

    Ok(())
}

/// Tests looking up a name that is not stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let tag = repo.find_by_name("missing").await?;

    assert!(tag.is_none());

    Ok(())
}

/// Tests that a stored owner ID which is not a snowflake surfaces as an internal error.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_for_corrupt_owner_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db)
        .name("broken")
        .owner_id("not-a-number")
        .build()
        .await?;

    let repo = TagRepository::new(db);
    let result = repo.find_by_name("broken").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
