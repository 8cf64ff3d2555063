use super::*;

/// Tests that the owner can edit their tag.
///
/// Expected: Ok with content replaced
#[tokio::test]
async fn owner_edits_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db)
        .name("faq")
        .owner_id("7")
        .build()
        .await?;

    let tag = TagService::new(db)
        .edit(&member(7), "faq", "Updated answer")
        .await?;

    assert_eq!(tag.content, "Updated answer");

    Ok(())
}

/// Tests that another member cannot edit a tag they do not own.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db)
        .name("faq")
        .owner_id("7")
        .build()
        .await?;

    let result = TagService::new(db)
        .edit(&promoted(8), "faq", "Hijacked")
        .await;

    assert!(matches!(result, Err(AppError::AccessDenied(_))));

    Ok(())
}

/// Tests editing a tag that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TagService::new(db).edit(&admin(1), "missing", "x").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
