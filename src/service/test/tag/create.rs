use super::*;

/// Tests that a promoted member can create a tag.
///
/// Verifies that the name is stored lowercased and the caller becomes the owner.
///
/// Expected: Ok with tag created
#[tokio::test]
async fn promoted_member_creates_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TagService::new(db);
    let tag = service.create(&promoted(42), "Rules", "Be nice.").await?;

    assert_eq!(tag.name, "rules");
    assert_eq!(tag.owner_id, 42);
    assert_eq!(service.get("RULES").await?.content, "Be nice.");

    Ok(())
}

/// Tests that a member without a promoted role cannot create tags.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_unpromoted_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TagService::new(db)
        .create(&member(42), "rules", "Be nice.")
        .await;

    assert!(matches!(result, Err(AppError::AccessDenied(_))));

    Ok(())
}

/// Tests that a name differing only in case counts as a duplicate.
///
/// Expected: Err(Rejected) titled "Already exists"
#[tokio::test]
async fn rejects_duplicate_name_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db).name("rules").build().await?;

    let result = TagService::new(db)
        .create(&admin(1), "RULES", "Other content")
        .await;

    assert!(matches!(
        result,
        Err(AppError::Rejected { ref title, .. }) if title == "Already exists"
    ));

    Ok(())
}

/// Tests that overlong content is rejected before hitting the database.
///
/// Expected: Err(Rejected) titled "Invalid tag"
#[tokio::test]
async fn rejects_overlong_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TagService::new(db)
        .create(&admin(1), "long", &"a".repeat(2001))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Rejected { ref title, .. }) if title == "Invalid tag"
    ));

    Ok(())
}
